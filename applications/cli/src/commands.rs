//! Subcommand implementations
//!
//! Each command renders its output into a `String` so the binary only
//! prints and tests can inspect it.

use crate::config::AppConfig;
use crate::error::Result;
use crate::preview::{run_preview, validate_track_seconds, ClockDevice, PreviewOptions};
use keepsake_core::{share_link, Asset, ClientId};
use keepsake_gallery::{FilterKind, GalleryCatalog, LoadReport};
use keepsake_playback::{format_time, PlaybackSession, SessionEvent};
use keepsake_server_client::{
    AuthSession, CredentialStore, FileCredentialStore, KeepsakeClient, ServerConfig,
};
use std::fmt::Write as _;
use tracing::warn;

/// Open the persisted auth session named by the config
pub fn auth_session(config: &AppConfig) -> Result<AuthSession<FileCredentialStore>> {
    let store = FileCredentialStore::new(&config.auth.credentials_path);
    Ok(AuthSession::init(store)?)
}

/// Build a backend client, authenticated if `auth` holds a token
pub fn connect<S: CredentialStore>(
    config: &AppConfig,
    auth: &AuthSession<S>,
) -> Result<KeepsakeClient> {
    let mut server = ServerConfig::new(&config.server.url).timeout(config.timeout());
    server.access_token = auth.bearer().map(str::to_string);
    Ok(KeepsakeClient::new(server)?)
}

/// Load every collection of `client_id`, logging partial failures
pub async fn load_catalog(
    client: &KeepsakeClient,
    client_id: ClientId,
) -> Result<(GalleryCatalog, LoadReport)> {
    let mut catalog = GalleryCatalog::new();
    let report = catalog.load(client, client_id).await?;
    for (kind, error) in &report.failures {
        warn!(kind = %kind, error = %error, "Collection unavailable, showing it empty");
    }
    Ok((catalog, report))
}

fn failure_banner(out: &mut String, report: &LoadReport) {
    for (kind, error) in &report.failures {
        let _ = writeln!(out, "! could not load {kind}s: {error}");
    }
}

fn asset_line(out: &mut String, position: usize, asset: &Asset) {
    let _ = writeln!(
        out,
        "{:>3}. [{}] {}  {}",
        position + 1,
        asset.kind,
        asset.name,
        asset.locator
    );
}

/// `keepsake gallery`
pub async fn gallery(
    config: &AppConfig,
    client: &KeepsakeClient,
    client_id: ClientId,
    filter: FilterKind,
    search: Option<String>,
) -> Result<String> {
    let link = share_link(&config.server.public_base_url, &client_id);
    let (mut catalog, report) = load_catalog(client, client_id).await?;
    catalog.set_filter_kind(filter);
    if let Some(term) = search {
        catalog.set_search_term(term);
    }

    let mut out = String::new();
    failure_banner(&mut out, &report);
    if catalog.has_media() {
        for (i, asset) in catalog.visible_items().enumerate() {
            asset_line(&mut out, i, asset);
        }
    } else {
        out.push_str("No photos or videos yet\n");
    }
    let _ = writeln!(out, "Share: {link}");
    Ok(out)
}

/// `keepsake playlist`
pub async fn playlist(client: &KeepsakeClient, client_id: ClientId) -> Result<String> {
    let (catalog, report) = load_catalog(client, client_id).await?;

    let mut out = String::new();
    failure_banner(&mut out, &report);
    if catalog.audio().is_empty() {
        out.push_str("No audio tracks\n");
    }
    for (i, track) in catalog.audio().iter().enumerate() {
        asset_line(&mut out, i, track);
    }
    Ok(out)
}

/// Render one session event as a transcript line
pub fn describe_event(event: &SessionEvent) -> Option<String> {
    match event {
        SessionEvent::TrackChanged { index, asset_id, .. } => {
            Some(format!("> track {} ({asset_id})", index + 1))
        }
        SessionEvent::StateChanged { state } => Some(format!("  state: {state:?}")),
        SessionEvent::DurationChanged { duration } if *duration > 0.0 => {
            Some(format!("  duration: {}", format_time(*duration)))
        }
        SessionEvent::StartRejected { reason } => Some(format!("! start rejected: {reason}")),
        _ => None,
    }
}

/// `keepsake preview`
pub async fn preview(
    config: &AppConfig,
    client: &KeepsakeClient,
    client_id: ClientId,
    track_seconds: f64,
    options: PreviewOptions,
) -> Result<String> {
    let track_seconds = validate_track_seconds(track_seconds)?;
    let (catalog, report) = load_catalog(client, client_id).await?;

    let mut out = String::new();
    failure_banner(&mut out, &report);

    let tracks = catalog.audio_tracks();
    if tracks.is_empty() {
        out.push_str("No audio tracks\n");
        return Ok(out);
    }

    let mut session = PlaybackSession::new(
        ClockDevice::new(track_seconds),
        config.playback.clone(),
    );
    run_preview(&mut session, tracks, options, |event| {
        if let Some(line) = describe_event(event) {
            out.push_str(&line);
            out.push('\n');
        }
    })
    .await;

    let progress = session.progress();
    let _ = writeln!(out, "= {} / -{}", progress.elapsed, progress.remaining);
    Ok(out)
}

/// `keepsake login`
pub fn login(config: &AppConfig, token: &str, role: &str) -> Result<String> {
    let mut auth = auth_session(config)?;
    auth.login(token, role)?;
    Ok(format!("Logged in as {role}\n"))
}

/// `keepsake logout`
pub fn logout(config: &AppConfig) -> Result<String> {
    let mut auth = auth_session(config)?;
    auth.logout()?;
    Ok("Logged out\n".to_string())
}
