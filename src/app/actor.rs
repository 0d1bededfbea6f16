//! App actor - message loop processing UI events and store changes

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::app::state::AppState;
use crate::messages::{RenderState, StoreCommand, StoreOutcome, UiEvent};
use crate::network::CityApi;
use crate::store::CitiesStore;

/// App actor that turns UI events into store operations
pub struct AppActor<A> {
    state: AppState,
    store: CitiesStore<A>,
    render_tx: mpsc::UnboundedSender<RenderState>,
    tasks: JoinSet<StoreOutcome>,
}

impl<A: CityApi> AppActor<A> {
    pub fn new(store: CitiesStore<A>, render_tx: mpsc::UnboundedSender<RenderState>) -> Self {
        AppActor {
            state: AppState::new(),
            store,
            render_tx,
            tasks: JoinSet::new(),
        }
    }

    /// Run the actor message loop
    pub async fn run(mut self, mut ui_rx: mpsc::UnboundedReceiver<UiEvent>) {
        let mut store_rx = self.store.subscribe();
        self.state.sync_store(self.store.snapshot());

        // Activating the store fetches the collection once
        self.execute(StoreCommand::LoadAll);
        self.render();

        loop {
            tokio::select! {
                event = ui_rx.recv() => {
                    // A dropped UI sender means nobody is left to quit
                    let Some(event) = event else { break };
                    if self.handle_ui_event(event) {
                        break;
                    }
                    self.render();
                }
                Ok(()) = store_rx.changed() => {
                    let snapshot = store_rx.borrow_and_update().clone();
                    self.state.sync_store(snapshot);
                    self.render();
                }
                Some(joined) = self.tasks.join_next() => {
                    match joined {
                        Ok(outcome) => {
                            self.state.sync_store(self.store.snapshot());
                            self.state.handle_outcome(outcome);
                        }
                        Err(e) => tracing::error!(error = %e, "Store task failed"),
                    }
                    self.render();
                }
                else => break,
            }
        }

        tracing::info!(pending = self.tasks.len(), "App actor stopped");
    }

    fn render(&self) {
        let _ = self.render_tx.send(self.state.to_render_state());
    }

    /// Run a store operation in the background
    fn execute(&mut self, command: StoreCommand) {
        tracing::info!(command = command.name(), "Starting store operation");
        let store = self.store.clone();
        self.tasks.spawn(async move {
            match command {
                StoreCommand::LoadAll => {
                    store.load_all().await;
                    StoreOutcome::Loaded
                }
                StoreCommand::LoadOne(id) => {
                    store.load_one(&id).await;
                    StoreOutcome::CityLoaded(id)
                }
                StoreCommand::Create(city) => StoreOutcome::Created(store.create(city).await),
                StoreCommand::Remove(id) => {
                    store.remove(&id).await;
                    StoreOutcome::Removed(id)
                }
            }
        });
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Tab switching
            UiEvent::SwitchTab(tab) => self.state.switch_tab(tab),

            // City list
            UiEvent::NextCity => self.state.next_city(),
            UiEvent::PrevCity => self.state.prev_city(),
            UiEvent::OpenCity => {
                if let Some(cmd) = self.state.open_selected() {
                    self.execute(cmd);
                }
            }
            UiEvent::DeleteCity => {
                if let Some(cmd) = self.state.delete_selected() {
                    self.execute(cmd);
                }
            }
            UiEvent::Reload => {
                let cmd = self.state.reload();
                self.execute(cmd);
            }

            // New-city form
            UiEvent::OpenForm => self.state.open_form(),
            UiEvent::FormChar(c) => self.state.form_char(c),
            UiEvent::FormBackspace => self.state.form_backspace(),
            UiEvent::FormNextField => self.state.form_next_field(),
            UiEvent::FormPrevField => self.state.form_prev_field(),
            UiEvent::SubmitForm => {
                if let Some(cmd) = self.state.submit_form() {
                    self.execute(cmd);
                }
            }
            UiEvent::CancelForm => self.state.cancel_form(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
