//! Handler für den Chroma-Key-Video-Modus.

use glam::Vec3;

use super::HandlerContext;
use crate::app::load_queue::PendingLoad;
use crate::app::AppState;
use crate::core::{video_node_scale, PlacedVideo, VideoSession};
use crate::host::{Renderable, SurfaceHit, VideoRenderable};

/// Öffnet eine gewählte Videoquelle und fordert das Chroma-Key-Renderable an.
pub fn open_video(
    state: &mut AppState,
    ctx: &mut HandlerContext,
    uri: String,
    dimensions: Option<(u32, u32)>,
) {
    release(state, ctx);
    state.ui.video_picker_open = false;

    let ticket = state.loads.issue(PendingLoad::Video);
    ctx.loader
        .load_video(ticket, &uri, state.options.chroma_key_color, ctx.load_tx.clone());
    log::info!("Video gewählt: {} (Ticket {:?})", uri, ticket);
    state.video = Some(VideoSession::new(uri, dimensions));
}

/// Übernimmt das geladene Renderable in die laufende Sitzung.
pub fn renderable_loaded(state: &mut AppState, renderable: VideoRenderable) {
    match state.video.as_mut() {
        Some(session) if session.source == renderable.source => {
            session.renderable = Some(renderable);
            log::info!("Video-Renderable bereit: {}", session.source);
        }
        _ => log::debug!("Video-Renderable ohne passende Sitzung verworfen"),
    }
}

/// Platziert ein Video-Quad am Treffer.
///
/// Die erste Platzierung startet die Wiedergabe und wartet auf das erste Bild.
pub fn place_video(state: &mut AppState, ctx: &mut HandlerContext, hit: SurfaceHit) {
    let height_meters = state.options.video_height_meters;
    let Some(session) = state.video.as_mut() else {
        log::debug!("Kein Video gewählt, Tipp ignoriert");
        return;
    };
    let Some(renderable) = session.renderable.clone() else {
        log::debug!("Video-Renderable noch nicht geladen, Tipp ignoriert");
        return;
    };

    let anchor = ctx.host.create_anchor(&hit);
    let anchor_node = ctx.host.create_anchor_node(anchor);
    ctx.host.add_to_scene(anchor_node);
    let scale = video_node_scale(session.dimensions, height_meters);
    let video_node = ctx.host.create_child_node(anchor_node, Vec3::ZERO, scale);

    if session.playing {
        ctx.host
            .set_renderable(video_node, Some(Renderable::Video(renderable)));
    } else {
        session.playing = true;
        session.looping = true;
        session.awaiting_first_frame.push(video_node);
        log::info!("Wiedergabe gestartet: {}", session.source);
    }
    session.placed.push(PlacedVideo {
        anchor,
        anchor_node,
        video_node,
    });
}

/// Hängt das Renderable an alle Nodes, die auf das erste Videobild warten.
pub fn attach_pending(state: &mut AppState, ctx: &mut HandlerContext) {
    let Some(session) = state.video.as_mut() else {
        return;
    };
    let Some(renderable) = session.renderable.clone() else {
        return;
    };
    for node in session.awaiting_first_frame.drain(..) {
        ctx.host
            .set_renderable(node, Some(Renderable::Video(renderable.clone())));
    }
}

/// Gibt Player und alle Video-Quads frei.
pub fn release(state: &mut AppState, ctx: &mut HandlerContext) {
    let Some(session) = state.video.take() else {
        return;
    };
    for placed in &session.placed {
        ctx.host.remove_from_scene(placed.anchor_node);
        ctx.host.destroy_node(placed.video_node);
        ctx.host.destroy_node(placed.anchor_node);
        ctx.host.destroy_anchor(placed.anchor);
    }
    log::info!(
        "Videoplayer freigegeben ({} Quads entfernt)",
        session.placed.len()
    );
}
