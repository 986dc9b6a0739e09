use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use log::{debug, error};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::controllers::interactive::data::artifact_frame::ArtifactFrame;
use crate::controllers::interactive::events::preview::PreviewEvent;
use crate::controllers::interactive::ports::encoder::QrEncoderPort;
use crate::controllers::interactive::ports::presenter::PreviewPresenterPort;
use crate::core::actions::cancellation::{CancelToken, GenerationCounter, GenerationToken};
use crate::core::data::encode_request::EncodeRequest;
use crate::core::data::parameters::Parameters;
use crate::core::state::parameter_store::ParametersListener;
use crate::core::util::lock::lock_unpoisoned;

/// What a parameters change turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Content was empty; the empty preview was published without encoding.
    Cleared { generation: u64 },
    /// An encode request is in flight for this generation.
    Issued { generation: u64 },
}

impl Submission {
    #[must_use]
    pub fn generation(self) -> u64 {
        match self {
            Self::Cleared { generation } | Self::Issued { generation } => generation,
        }
    }
}

struct SharedState {
    generations: Arc<GenerationCounter>,
    last_published_generation: AtomicU64,
    // Serializes issuing a generation against check-then-publish, so a result
    // can never be published after a newer generation has been issued.
    publish_lock: Mutex<()>,
    encoder: Arc<dyn QrEncoderPort>,
    presenter_port: Arc<dyn PreviewPresenterPort>,
}

impl SharedState {
    fn publish_if_current<C: CancelToken>(&self, token: &C, event: PreviewEvent) -> bool {
        let _guard = lock_unpoisoned(&self.publish_lock);
        let generation = event.generation();

        if token.is_cancelled() {
            debug!("discarding stale result for generation {generation}");
            return false;
        }

        self.presenter_port.present(event);
        self.last_published_generation
            .store(generation, Ordering::Release);

        true
    }
}

/// Recomputes the preview artifact whenever parameters change.
///
/// Every change issues a new generation. Encode calls cannot be aborted, so a
/// call that resolves after a newer generation was issued has its result
/// dropped instead.
pub struct RecomputationController {
    shared: Arc<SharedState>,
    runtime: Handle,
    in_flight: Mutex<Vec<JoinHandle<()>>>,
}

impl RecomputationController {
    pub fn new(
        encoder: Arc<dyn QrEncoderPort>,
        presenter_port: Arc<dyn PreviewPresenterPort>,
        runtime: Handle,
    ) -> Self {
        let shared = Arc::new(SharedState {
            generations: Arc::new(GenerationCounter::new()),
            last_published_generation: AtomicU64::new(0),
            publish_lock: Mutex::new(()),
            encoder,
            presenter_port,
        });

        Self {
            shared,
            runtime,
            in_flight: Mutex::new(Vec::new()),
        }
    }

    pub fn on_parameters_changed(&self, parameters: &Parameters) -> Submission {
        let token = {
            let _guard = lock_unpoisoned(&self.shared.publish_lock);
            let token = self.shared.generations.advance();
            let generation = token.generation();

            if !parameters.has_content() {
                debug!("generation {generation}: empty content, clearing preview");
                self.shared
                    .presenter_port
                    .present(PreviewEvent::Cleared { generation });
                self.shared
                    .last_published_generation
                    .store(generation, Ordering::Release);

                return Submission::Cleared { generation };
            }

            token
        };

        let generation = token.generation();
        debug!(
            "generation {generation}: encoding {} bytes at {}px, level {}",
            parameters.content.len(),
            parameters.pixel_size,
            parameters.error_correction
        );

        let handle = self.spawn_encode(token, EncodeRequest::from(parameters));

        let mut in_flight = lock_unpoisoned(&self.in_flight);
        in_flight.retain(|handle| !handle.is_finished());
        in_flight.push(handle);

        Submission::Issued { generation }
    }

    fn spawn_encode(&self, token: GenerationToken, request: EncodeRequest) -> JoinHandle<()> {
        let shared = Arc::clone(&self.shared);

        self.runtime.spawn(async move {
            let start = Instant::now();
            let result = shared.encoder.encode(request).await;
            let encode_duration = start.elapsed();
            let generation = token.generation();

            match result {
                Ok(artifact) => {
                    let event = PreviewEvent::Artifact(ArtifactFrame {
                        generation,
                        artifact,
                        encode_duration,
                    });

                    if shared.publish_if_current(&token, event) {
                        debug!(
                            "generation {generation}: published after {} ms",
                            encode_duration.as_millis()
                        );
                    }
                }
                Err(error) => {
                    error!("generation {generation}: encode failed: {error}");
                }
            }
        })
    }

    /// Waits until every encode request issued so far has resolved.
    ///
    /// An encode call that never resolves makes this wait forever.
    pub async fn settle(&self) {
        loop {
            let handles = std::mem::take(&mut *lock_unpoisoned(&self.in_flight));

            if handles.is_empty() {
                return;
            }

            for handle in handles {
                if let Err(join_error) = handle.await {
                    if join_error.is_panic() {
                        error!("encode task panicked: {join_error}");
                    }
                }
            }
        }
    }

    /// Aborts in-flight encode tasks.
    pub fn shutdown(&self) {
        for handle in lock_unpoisoned(&self.in_flight).drain(..) {
            handle.abort();
        }
    }

    #[must_use]
    pub fn current_generation(&self) -> u64 {
        self.shared.generations.current()
    }

    #[must_use]
    pub fn last_published_generation(&self) -> u64 {
        self.shared
            .last_published_generation
            .load(Ordering::Acquire)
    }
}

impl ParametersListener for RecomputationController {
    fn parameters_changed(&self, parameters: &Parameters) {
        self.on_parameters_changed(parameters);
    }
}

impl Drop for RecomputationController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
