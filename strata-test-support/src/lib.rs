//! Shared test utilities used across strata crates.

pub mod tracing {
    //! Event capture for asserting on the diagnostics a call emits.
    use std::collections::BTreeMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, PoisonError};

    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::{Layer, registry};

    /// Layer that stores every event it observes, in emission order.
    ///
    /// Clones share one buffer, so a test can keep a handle while the
    /// subscriber owns another.
    #[derive(Clone, Debug, Default)]
    pub struct RecordingLayer {
        events: Arc<Mutex<Vec<EventRecord>>>,
    }

    impl RecordingLayer {
        /// Returns a snapshot of the events recorded so far.
        ///
        /// # Examples
        /// ```
        /// use strata_test_support::tracing::RecordingLayer;
        ///
        /// let layer = RecordingLayer::default();
        /// assert!(layer.events().is_empty());
        /// ```
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }
    }

    /// Snapshot of one emitted event.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct EventRecord {
        /// Level the event was emitted at.
        pub level: Level,
        /// Event target, normally the emitting module path.
        pub target: String,
        /// Structured fields, including `message`, rendered as strings.
        pub fields: BTreeMap<String, String>,
    }

    impl EventRecord {
        /// Returns the rendered value of `name`, if the event carried it.
        #[must_use]
        pub fn field(&self, name: &str) -> Option<&str> {
            self.fields.get(name).map(String::as_str)
        }

        /// Returns the event's message.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.field("message")
        }
    }

    impl<S: Subscriber> Layer<S> for RecordingLayer {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = BTreeMap::new();
            event.record(&mut FieldRecorder {
                fields: &mut fields,
            });
            let metadata = event.metadata();
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(EventRecord {
                    level: *metadata.level(),
                    target: metadata.target().to_owned(),
                    fields,
                });
        }
    }

    /// Runs `f` under a thread-local subscriber and returns its output with
    /// every event emitted meanwhile.
    ///
    /// # Examples
    /// ```
    /// use strata_test_support::tracing::capture_events;
    /// use tracing::Level;
    ///
    /// let (value, events) = capture_events(|| {
    ///     tracing::warn!(node = 3, "over budget");
    ///     7
    /// });
    /// assert_eq!(value, 7);
    /// assert_eq!(events.len(), 1);
    /// assert_eq!(events[0].level, Level::WARN);
    /// assert_eq!(events[0].field("node"), Some("3"));
    /// assert_eq!(events[0].message(), Some("over budget"));
    /// ```
    pub fn capture_events<T>(f: impl FnOnce() -> T) -> (T, Vec<EventRecord>) {
        let layer = RecordingLayer::default();
        let subscriber = registry().with(layer.clone());
        let output = tracing::subscriber::with_default(subscriber, f);
        (output, layer.events())
    }

    struct FieldRecorder<'a> {
        fields: &'a mut BTreeMap<String, String>,
    }

    impl FieldRecorder<'_> {
        fn insert(&mut self, field: &Field, value: impl ToString) {
            self.fields.insert(field.name().to_owned(), value.to_string());
        }
    }

    impl Visit for FieldRecorder<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.insert(field, format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.insert(field, value);
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.insert(field, value);
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.insert(field, value);
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.insert(field, value);
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.insert(field, value);
        }

        fn record_f64(&mut self, field: &Field, value: f64) {
            self.insert(field, value);
        }
    }

}

pub mod ci;
