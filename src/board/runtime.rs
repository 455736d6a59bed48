//! Drives the board: feeds events into `update` and carries out the
//! effects it returns. Requests and hide timers run as tokio tasks that
//! post their completion back over a channel, so one pending request
//! never holds up another. The view state itself is only ever touched
//! from `Board`.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use super::client::ActivityApi;
use super::state::ViewState;
use super::update::{Effect, Event, update};

/// Blocking user interaction: yes/no questions and alerts.
pub trait Prompt {
    fn confirm(&mut self, question: &str) -> bool;
    fn alert(&mut self, message: &str);
}

/// Answers every confirmation with yes and prints alerts to stderr.
pub struct AssumeYes;

impl Prompt for AssumeYes {
    fn confirm(&mut self, _question: &str) -> bool {
        true
    }

    fn alert(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}

enum Delivery {
    Response(Event),
    Timer(Event),
}

pub struct Board<P: Prompt> {
    api: Arc<dyn ActivityApi>,
    prompt: P,
    state: ViewState,
    message_timeout: Duration,
    tx: mpsc::UnboundedSender<Delivery>,
    rx: mpsc::UnboundedReceiver<Delivery>,
    // Requests sent whose response hasn't been dispatched yet
    in_flight: usize,
}

impl<P: Prompt> Board<P> {
    pub fn new(api: Arc<dyn ActivityApi>, prompt: P, message_timeout: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            api,
            prompt,
            state: ViewState::new(),
            message_timeout,
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Load the board and wait for the first render.
    pub async fn load(&mut self) {
        self.dispatch(Event::Load);
        self.settle().await;
    }

    /// Apply an event and start whatever it asks for. Confirmations and
    /// alerts are resolved inline since they block the user anyway.
    pub fn dispatch(&mut self, event: Event) {
        let mut queue = VecDeque::from([event]);

        while let Some(event) = queue.pop_front() {
            for effect in update(&mut self.state, event, self.message_timeout) {
                match effect {
                    Effect::FetchActivities => self.fetch_activities(),
                    Effect::Signup { activity, email } => self.signup(activity, email),
                    Effect::Unregister { activity, email } => self.unregister(activity, email),
                    Effect::Confirm {
                        activity,
                        email,
                        question,
                    } => {
                        if self.prompt.confirm(&question) {
                            queue.push_back(Event::UnregisterConfirmed { activity, email });
                        } else {
                            tracing::debug!("Unregister of {} from {} declined", email, activity);
                        }
                    }
                    Effect::Alert(message) => self.prompt.alert(&message),
                    Effect::HideNoticeAfter { generation, delay } => {
                        self.hide_notice_after(generation, delay)
                    }
                }
            }
        }
    }

    /// Wait for the next response or timer and apply it. Returns false
    /// once the channel is closed.
    pub async fn tick(&mut self) -> bool {
        match self.rx.recv().await {
            Some(delivery) => {
                self.deliver(delivery);
                true
            }
            None => false,
        }
    }

    /// Dispatch every response until no request is outstanding,
    /// including the re-fetches those responses trigger. Timers that
    /// fire in the meantime are applied too but never waited on.
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            if !self.tick().await {
                break;
            }
        }
        self.drain();
    }

    /// Apply everything that has already arrived without waiting.
    pub fn drain(&mut self) {
        while let Ok(delivery) = self.rx.try_recv() {
            self.deliver(delivery);
        }
    }

    fn deliver(&mut self, delivery: Delivery) {
        match delivery {
            Delivery::Response(event) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.dispatch(event);
            }
            Delivery::Timer(event) => self.dispatch(event),
        }
    }

    fn fetch_activities(&mut self) {
        self.in_flight += 1;
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.list_activities().await;
            let _ = tx.send(Delivery::Response(Event::ActivitiesFetched(result)));
        });
    }

    fn signup(&mut self, activity: String, email: String) {
        tracing::debug!("Signing up {} for {}", email, activity);
        self.in_flight += 1;
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.signup(&activity, &email).await;
            let _ = tx.send(Delivery::Response(Event::SignupFinished(result)));
        });
    }

    fn unregister(&mut self, activity: String, email: String) {
        tracing::debug!("Unregistering {} from {}", email, activity);
        self.in_flight += 1;
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.unregister(&activity, &email).await;
            let _ = tx.send(Delivery::Response(Event::UnregisterFinished {
                activity,
                email,
                result,
            }));
        });
    }

    fn hide_notice_after(&self, generation: u64, delay: Duration) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(Delivery::Timer(Event::HideNotice { generation }));
        });
    }
}
