//! # Gallery Builder Walkthrough
//!
//! Drives a builder session without a renderer, the way a host would: feed
//! messages in, act on the effects that come out.
//!
//! ## What this example shows:
//! - Adding an exhibit through the draft form
//! - Picking an exhibit, moving it with a preset and per-axis input, saving
//! - Handing a saved snapshot to a gallery store
//! - Reading the projected surfaces a renderer would draw
//!
//! ## Usage:
//! ```bash
//! RUST_LOG=debug cargo run --example gallery_builder
//! ```

use anyhow::Context;
use log::info;
use virtual_museum::prelude::*;

/// Feed one message and perform its effects against the store
fn dispatch(session: BuilderSession, message: Message, store: &mut InMemoryGalleryStore) -> BuilderSession {
    let Transition { session, effects } = session.update(message);

    for effect in effects {
        match effect {
            Effect::SaveRequested(gallery) => store.save(&gallery),
            Effect::SceneChanged(scene) => info!("Scene now shows {}", scene.caption()),
            Effect::ValidationFailed(err) => info!("Form error: {}", err),
            Effect::DraftDiscarded => info!("Unsaved input discarded"),
            Effect::ExhibitFocused(exhibit) => info!("Focused on '{}'", exhibit.title),
            _ => {}
        }
    }

    session
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut store = InMemoryGalleryStore::new();
    let session = virtual_museum::default();

    let script = vec![
        Message::SetTitle("Summer Collection".to_string()),
        Message::SetTemplate(GalleryTemplate::Modern),
        // Rejected: no image yet
        Message::StartAdd,
        Message::DraftTitle("Ocean Waves".to_string()),
        Message::SubmitDraft,
        Message::ImageResolved("blob:ocean-waves".to_string()),
        Message::SubmitDraft,
        Message::StartAdd,
        Message::DraftTitle("Desert Dunes".to_string()),
        Message::DraftDescription("Wind-carved ridges at dusk".to_string()),
        Message::ImageResolved("blob:desert-dunes".to_string()),
        Message::ApplyPreset(Preset::RightWall),
        Message::SubmitDraft,
    ];

    let session = script
        .into_iter()
        .fold(session, |session, message| dispatch(session, message, &mut store));

    let first = session
        .gallery()
        .exhibits()
        .first()
        .map(|e| e.id().clone())
        .context("gallery should hold the submitted exhibits")?;

    let edits = vec![
        Message::Pick(first.clone()),
        Message::ApplyPreset(Preset::LeftWall),
        Message::RotationInput(Axis::Y, "15".to_string()),
        Message::ScaleInput(Axis::X, "1.5".to_string()),
        Message::SaveEdits,
        Message::SaveGallery,
        Message::SetMode(ViewMode::View),
        Message::Tick(1.25),
    ];
    let session = edits
        .into_iter()
        .fold(session, |session, message| dispatch(session, message, &mut store));

    let saved = store
        .load(session.gallery().id())
        .context("saved gallery missing from store")?;
    info!("Stored '{}' with {} exhibits", saved.title(), saved.len());

    for surface in session.scene().surfaces {
        let at = surface.animated_position(session.elapsed());
        println!(
            "{:<14} at ({:>5.2}, {:>5.2}, {:>5.2}) scale {:.2}",
            surface.label, at.x, at.y, at.z, surface.transform.scale.x
        );
    }

    println!("{}", saved.to_json_pretty()?);
    Ok(())
}
