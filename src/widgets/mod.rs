//! Widget collaborators - policies around third-party runtimes the crate
//! does not own.
//!
//! Each widget's runtime sits behind a trait; the crate contributes only the
//! control flow: the map's bounded readiness poll with a geocode fallback,
//! the audio unlock deferred to the first user interaction, and the clipboard
//! copy with its fallback mechanism and transient notice.

mod audio;
mod clipboard;
mod map;

pub use audio::{AudioPlayer, AudioUnlock, PlaybackRejected};
pub use clipboard::{
    copy_account, AccountCard, Clipboard, ClipboardError, CopyOutcome, Notice, NoticeSurface,
    COPY_FAILURE_NOTICE, COPY_SUCCESS_NOTICE, NOTICE_REVERT,
};
pub use map::{
    Coordinates, Geocoder, MapLoader, MapRuntime, MapStatus, Venue, MAP_MAX_ATTEMPTS,
    MAP_POLL_INTERVAL, VENUE_FALLBACK_COORDS,
};
