use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use foundation::geo::LonLat;
use foundation::math::{MercatorCamera, Vec2, ZoomRange};
use formats::roster::Roster;
use formats::scene_ingest::build_world;
use formats::topology::Topology;
use layers::markers::MarkersLayer;
use render::frame::compose_frame;
use render::svg::render_svg;
use runtime::{EventBus, EventKind, Frame};
use scene::interaction::{HoverState, InterestMark, PointerEvent};
use scene::picking::pick_marker;
use streaming::marks::MarkRequest;
use streaming::pipeline::BoundaryPipeline;
use streaming::residency::FetchState;
use streaming::source::FileSource;

const DEFAULT_GEOMETRY_URL: &str = "https://raw.githubusercontent.com/southkorea/southkorea-maps/master/kostat/2018/json/skorea-provinces-2018-topo.json";

/// Renders the ranked campus map to an SVG file.
#[derive(Debug, Parser)]
#[command(name = "viewer")]
struct Args {
    /// Ranked place roster (JSON).
    #[arg(long, default_value = "crates/apps/viewer/assets/universities.json")]
    roster: PathBuf,

    /// Remote boundary topology URL.
    #[arg(long, env = "ATLAS_GEOMETRY_URL", default_value = DEFAULT_GEOMETRY_URL)]
    geometry_url: String,

    /// Local topology file; skips the network when set.
    #[arg(long)]
    geometry_file: Option<PathBuf>,

    /// Output SVG path.
    #[arg(long, default_value = "campus-map.svg")]
    out: PathBuf,

    /// View time in seconds (drives the marker pulse).
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Zoom factor, clamped to the view's [6, 8] range.
    #[arg(long, default_value_t = 6.0)]
    zoom: f64,

    /// Simulated pointer position "x,y" for hover picking.
    #[arg(long)]
    pointer: Option<String>,

    /// Viewport size "WxH" in pixels.
    #[arg(long, default_value = "800x600")]
    viewport: String,

    /// Toggle an interest mark for this place and fire the request.
    #[arg(long)]
    mark: Option<String>,

    /// Interest-mark endpoint.
    #[arg(long, env = "ATLAS_MARK_URL")]
    mark_url: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if let Err(err) = run(args).await {
        error!("{err}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let roster_payload = tokio::fs::read_to_string(&args.roster).await?;
    let roster = Roster::from_json_str(&roster_payload)?;

    let mut pipeline: BoundaryPipeline<Topology> = BoundaryPipeline::new();
    match &args.geometry_file {
        Some(path) => {
            let source = FileSource::new(path);
            pipeline.run(&source, Topology::from_topojson_str);
        }
        None => fetch_remote(&mut pipeline, &args.geometry_url).await,
    }

    let dt_s = 1.0 / 60.0;
    let frame = Frame::new((args.time.max(0.0) / dt_s).round() as u64, dt_s);
    let mut events = EventBus::new();

    match pipeline.state() {
        FetchState::Resident => {
            let regions = pipeline.resident().map(|t| t.features.len()).unwrap_or(0);
            events.emit(frame, EventKind::BoundariesResident, format!("{regions} regions"));
        }
        FetchState::Failed => {
            let reason = pipeline.failure().unwrap_or("unknown").to_string();
            error!("boundary geometry unavailable: {reason}");
            events.emit(frame, EventKind::BoundariesFailed, reason);
        }
        _ => {}
    }

    let world = build_world(&roster, pipeline.resident());

    let viewport = parse_viewport(&args.viewport)?;
    let mut camera = MercatorCamera::new(
        LonLat::new(127.0, 36.0),
        5000.0,
        viewport,
        ZoomRange::new(6.0, 8.0),
    );
    camera.set_zoom(args.zoom);

    let markers = MarkersLayer::new(0).extract(&world, &camera, frame.time);
    let mut hover = HoverState::Idle;
    if let Some(spec) = &args.pointer {
        let pointer = parse_pointer(spec)?;
        match pick_marker(&markers.pick_targets(), pointer) {
            Some(hit) => {
                if let Some(sprite) = markers.sprites.iter().find(|s| s.entity == hit.entity) {
                    hover = hover.transition(PointerEvent::Enter {
                        name: sprite.name.clone(),
                        x: pointer.x,
                        y: pointer.y,
                    });
                    events.emit(frame, EventKind::HoverEntered, sprite.name.clone());
                }
            }
            None => {
                hover = hover.transition(PointerEvent::Leave);
                events.emit(frame, EventKind::HoverLeft, "no marker under pointer");
            }
        }
    }

    if let Some(place) = &args.mark {
        let mut mark = InterestMark::default();
        let action = mark.toggle();
        let request = MarkRequest::new(place.clone(), action);
        events.emit(frame, EventKind::MarkFired, place.clone());
        match &args.mark_url {
            Some(url) => send_mark(url, &request).await,
            None => warn!("no mark endpoint configured; skipping delivery for {place}"),
        }
    }

    let notice = (pipeline.state() == FetchState::Failed)
        .then(|| "boundary data unavailable".to_string());
    let composed = compose_frame(
        &world,
        &camera,
        viewport,
        frame.time,
        &hover,
        &BTreeMap::new(),
        notice,
    );
    let svg = render_svg(&composed);
    tokio::fs::write(&args.out, svg).await?;
    events.emit(
        frame,
        EventKind::FrameComposed,
        format!(
            "{} regions, {} markers",
            composed.regions.shapes.len(),
            composed.markers.sprites.len()
        ),
    );

    for event in events.drain() {
        debug!(frame = event.frame_index, kind = ?event.kind, "{}", event.message);
    }
    info!(
        "wrote {} ({} regions, {} markers, zoom {})",
        args.out.display(),
        composed.regions.shapes.len(),
        composed.markers.sprites.len(),
        camera.zoom(),
    );
    Ok(())
}

/// Drives the boundary pipeline against the remote geometry source.
///
/// Every failure lands in the pipeline instead of aborting the program: the
/// map still renders with local markers and a visible notice.
async fn fetch_remote(pipeline: &mut BoundaryPipeline<Topology>, url: &str) {
    pipeline.begin_fetch();

    let client = reqwest::Client::new();
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(err) => {
            pipeline.fetch_failed(format!("GET {url} failed: {err}"));
            return;
        }
    };
    if !response.status().is_success() {
        pipeline.fetch_failed(format!("GET {url} answered {}", response.status()));
        return;
    }
    let payload = match response.text().await {
        Ok(payload) => payload,
        Err(err) => {
            pipeline.fetch_failed(format!("reading {url} failed: {err}"));
            return;
        }
    };

    pipeline.fetch_succeeded();
    match Topology::from_topojson_str(&payload) {
        Ok(topology) => pipeline.decode_succeeded(topology),
        Err(err) => pipeline.decode_failed(err.to_string()),
    }
}

/// Fire-and-forget mark delivery; a failed send is only worth a log line.
async fn send_mark(url: &str, request: &MarkRequest) {
    let client = reqwest::Client::new();
    match client.post(url).json(request).send().await {
        Ok(response) if response.status().is_success() => {
            info!("mark delivered for {}", request.place);
        }
        Ok(response) => warn!("mark delivery answered {}", response.status()),
        Err(err) => warn!("mark delivery failed: {err}"),
    }
}

fn parse_viewport(spec: &str) -> Result<Vec2, String> {
    let (w, h) = spec
        .split_once('x')
        .ok_or_else(|| format!("invalid viewport {spec:?}, expected WxH"))?;
    let w: f64 = w.parse().map_err(|_| format!("invalid viewport width {w:?}"))?;
    let h: f64 = h.parse().map_err(|_| format!("invalid viewport height {h:?}"))?;
    if w <= 0.0 || h <= 0.0 {
        return Err(format!("viewport must be positive, got {spec:?}"));
    }
    Ok(Vec2::new(w, h))
}

fn parse_pointer(spec: &str) -> Result<Vec2, String> {
    let (x, y) = spec
        .split_once(',')
        .ok_or_else(|| format!("invalid pointer {spec:?}, expected x,y"))?;
    let x: f64 = x.trim().parse().map_err(|_| format!("invalid pointer x {x:?}"))?;
    let y: f64 = y.trim().parse().map_err(|_| format!("invalid pointer y {y:?}"))?;
    Ok(Vec2::new(x, y))
}
