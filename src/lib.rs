//! invitation_rust - the core of an interactive single-page event invitation.
//!
//! Two stateful components that share nothing: a carousel state machine over
//! a fixed slide sequence, and a guestbook store whose ordered message
//! collection is mirrored to a durable key-value store. Around them, the page
//! wiring and the widget policies (map readiness polling, audio unlock,
//! clipboard copy with fallback) drive surfaces the embedding shell injects
//! behind traits.

mod carousel;
mod guestbook;
mod page;
mod render;
mod store;
mod widgets;

pub use carousel::{
    Carousel, CarouselFrame, CarouselSurface, SwipeDirection, SwipeTracker, SWIPE_THRESHOLD,
};
pub use guestbook::{
    editor_action, validate, validate_author, validate_body, EditorAction, EditorKey,
    GuestbookStore, Message, SubmitError, ValidationError, MAX_AUTHOR_LEN, MAX_BODY_LEN,
    STORAGE_KEY, SUBMITTED_EVENT,
};
pub use page::{Page, Regions};
pub use render::{escape_text, message_list_markup, InputField, Region, EMPTY_PLACEHOLDER};
pub use store::{FileStore, InMemoryStore, KeyValueStore, StoreError};
pub use widgets::{
    copy_account, AccountCard, AudioPlayer, AudioUnlock, Clipboard, ClipboardError, Coordinates,
    CopyOutcome, Geocoder, MapLoader, MapRuntime, MapStatus, Notice, NoticeSurface,
    PlaybackRejected, Venue, COPY_FAILURE_NOTICE, COPY_SUCCESS_NOTICE, MAP_MAX_ATTEMPTS,
    MAP_POLL_INTERVAL, NOTICE_REVERT, VENUE_FALLBACK_COORDS,
};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
