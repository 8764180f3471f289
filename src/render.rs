use std::{
    fmt::Write as _,
    path::{Path, PathBuf},
};

use cairo::{Context, FontSlant, FontWeight, LineCap, SvgSurface, SvgUnit};
use tracing::{debug, info};

use crate::{
    color::Color,
    compare::Evaluation,
    graph::{edges_label, Algorithm, Graph, MstResult},
    layout::CircularLayout,
};

const VERTEX_RADIUS: f64 = 25.;
const EDGE_WIDTH: f64 = 2.;
const LABEL_BOX: [f64; 2] = [40., 20.];
const LABEL_TEXT: Color = Color::new(0.2, 0.2, 0.2);

/// Canvas settings shared by every drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub width: f64,
    pub height: f64,
    pub radius_fraction: f64,
    pub edge_color: Color,
    pub vertex_color: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 600.,
            height: 400.,
            radius_fraction: 0.35,
            edge_color: Color::from_rgb8(0x28, 0xa7, 0x45),
            vertex_color: Color::from_rgb8(0x66, 0x7e, 0xea),
        }
    }
}

impl RenderOptions {
    pub fn layout(&self) -> CircularLayout {
        CircularLayout::for_canvas(self.width, self.height, self.radius_fraction)
    }
}

/// Draw `mst` over the circularly laid out vertices of `graph` into an SVG at `out`.
///
/// Tree edges go first with their weight on a white box at the midpoint, then every vertex
/// as a labelled disc on top.
pub fn render_svg(
    graph: &Graph,
    mst: &MstResult,
    options: &RenderOptions,
    out: &Path,
) -> Result<(), cairo::Error> {
    let mut surf = SvgSurface::new(options.width, options.height, Some(out))?;
    surf.set_document_unit(SvgUnit::Px);
    let ctx = Context::new(&surf)?;

    ctx.set_source_rgb(1., 1., 1.);
    ctx.rectangle(0., 0., options.width, options.height);
    ctx.fill()?;

    let positions = options.layout().place(graph.vertices());

    debug!("Draw {} tree edges", mst.edge_count());
    ctx.set_line_cap(LineCap::Round);
    ctx.set_line_width(EDGE_WIDTH);
    ctx.select_font_face("Arial", FontSlant::Normal, FontWeight::Normal);
    ctx.set_font_size(12.);
    for edge in &mst.edges {
        let (Some(from), Some(to)) = (
            positions.get(edge.city_a.as_str()),
            positions.get(edge.city_b.as_str()),
        ) else {
            continue;
        };
        set_source(&ctx, options.edge_color);
        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
        ctx.stroke()?;

        let mid = from.lerp(*to, 0.5);
        set_source(&ctx, Color::WHITE);
        ctx.rectangle(
            mid.x - LABEL_BOX[0] / 2.,
            mid.y - LABEL_BOX[1] / 2.,
            LABEL_BOX[0],
            LABEL_BOX[1],
        );
        ctx.fill()?;
        set_source(&ctx, LABEL_TEXT);
        show_centered_text(&ctx, &edge.weight.to_string(), mid.x, mid.y + 4.)?;
    }

    debug!("Draw {} vertices", graph.vertices().len());
    ctx.select_font_face("Arial", FontSlant::Normal, FontWeight::Bold);
    ctx.set_font_size(10.);
    for vertex in graph.vertices() {
        let Some(pos) = positions.get(vertex.as_str()) else {
            continue;
        };
        set_source(&ctx, options.vertex_color);
        ctx.new_sub_path();
        ctx.arc(pos.x, pos.y, VERTEX_RADIUS, 0., std::f64::consts::TAU);
        ctx.fill()?;
        set_source(&ctx, Color::WHITE);
        show_centered_text(&ctx, vertex, pos.x, pos.y + 3.)?;
    }

    drop(ctx);
    surf.finish();
    Ok(())
}

/// Write `prim.svg` and `kruskal.svg` into `dir`, returning the written paths.
pub fn render_evaluation(
    graph: &Graph,
    evaluation: &Evaluation,
    options: &RenderOptions,
    dir: &Path,
) -> Result<Vec<PathBuf>, crate::Error> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(Algorithm::ALL.len());
    for algorithm in Algorithm::ALL {
        let path = dir.join(format!("{}.svg", algorithm.name()));
        render_svg(graph, evaluation.result(algorithm), options, &path)?;
        info!("Wrote {} tree to {}", algorithm, path.display());
        written.push(path);
    }
    Ok(written)
}

fn set_source(ctx: &Context, color: Color) {
    ctx.set_source_rgb(color[0], color[1], color[2]);
}

fn show_centered_text(ctx: &Context, text: &str, x: f64, baseline: f64) -> Result<(), cairo::Error> {
    let extents = ctx.text_extents(text)?;
    ctx.move_to(x - extents.width() / 2. - extents.x_bearing(), baseline);
    ctx.show_text(text)
}

/// Plain text listing of one tree, one edge per line.
pub fn mst_report(algorithm: Algorithm, mst: &MstResult) -> String {
    let mut report = format!(
        "{} algorithm: total cost {} km, {}\n",
        algorithm,
        mst.total_cost,
        edges_label(mst.edge_count())
    );
    for edge in &mst.edges {
        let _ = writeln!(
            report,
            "  {} ↔ {}: {} km",
            edge.city_a, edge.city_b, edge.weight
        );
    }
    report
}

/// Both trees followed by the comparison verdict.
pub fn evaluation_report(evaluation: &Evaluation) -> String {
    let mut report = String::new();
    for algorithm in Algorithm::ALL {
        report.push_str(&mst_report(algorithm, evaluation.result(algorithm)));
    }
    report.push_str(&evaluation.comparison.summary());
    report.push('\n');
    report
}
