use std::time::Duration;

/// A latitude/longitude pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Venue coordinates used whenever geocoding fails or returns nothing.
pub const VENUE_FALLBACK_COORDS: Coordinates = Coordinates {
    lat: 37.3956,
    lng: 127.1112,
};

/// How often readiness is polled.
pub const MAP_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// How many failed readiness checks before giving up (~5 s).
pub const MAP_MAX_ATTEMPTS: u32 = 25;

/// The map widget's runtime, as seen by the loader.
pub trait MapRuntime {
    /// Whether the runtime has finished loading and can be initialized.
    fn is_ready(&self) -> bool;

    /// Create the map centered on `coords`. Called at most once.
    fn init(&mut self, coords: Coordinates);
}

/// Resolves the venue address to coordinates. Any failure falls back to the
/// venue's fixed coordinates.
pub trait Geocoder {
    fn geocode(&mut self, query: &str) -> Option<Coordinates>;
}

/// Where the map should point.
#[derive(Clone, Debug)]
pub struct Venue {
    pub query: String,
    pub fallback: Coordinates,
}

impl Venue {
    pub fn new(query: impl Into<String>) -> Self {
        Venue {
            query: query.into(),
            fallback: VENUE_FALLBACK_COORDS,
        }
    }
}

/// Loader outcome. `Waiting` is the only non-terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapStatus {
    Waiting,
    Ready,
    GaveUp,
}

/// Bounded-retry readiness poll: each tick checks the runtime once and, when
/// it is ready, geocodes the venue and initializes the map exactly once.
/// After [`MAP_MAX_ATTEMPTS`] failed checks the loader gives up and logs,
/// never crashes.
pub struct MapLoader<R: MapRuntime, G: Geocoder> {
    runtime: R,
    geocoder: G,
    venue: Venue,
    attempts: u32,
    status: MapStatus,
}

impl<R: MapRuntime, G: Geocoder> MapLoader<R, G> {
    pub fn new(runtime: R, geocoder: G, venue: Venue) -> Self {
        MapLoader {
            runtime,
            geocoder,
            venue,
            attempts: 0,
            status: MapStatus::Waiting,
        }
    }

    pub fn status(&self) -> MapStatus {
        self.status
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// One poll step. Terminal states are sticky.
    pub fn tick(&mut self) -> MapStatus {
        if self.status != MapStatus::Waiting {
            return self.status;
        }

        if self.runtime.is_ready() {
            let coords = self
                .geocoder
                .geocode(&self.venue.query)
                .unwrap_or(self.venue.fallback);
            self.runtime.init(coords);
            self.status = MapStatus::Ready;
        } else {
            self.attempts += 1;
            if self.attempts >= MAP_MAX_ATTEMPTS {
                log::warn!(
                    "map runtime not ready after {} checks, giving up",
                    self.attempts
                );
                self.status = MapStatus::GaveUp;
            }
        }

        self.status
    }

    /// Drive ticks to a terminal state, sleeping [`MAP_POLL_INTERVAL`]
    /// between checks through the injected sleeper.
    pub fn run(&mut self, mut sleep: impl FnMut(Duration)) -> MapStatus {
        loop {
            match self.tick() {
                MapStatus::Waiting => sleep(MAP_POLL_INTERVAL),
                terminal => return terminal,
            }
        }
    }
}
