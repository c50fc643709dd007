//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! It owns the submission lifecycle: constraint check, background request,
//! and routing the outcome to the result or error panel.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_main_layout, draw_header, draw_help_bar, error_lines, result_lines,
    scroll_to_reveal, FormComponent, HelpDialog, QuitDialog,
};
use crate::config::Config;
use crate::launch::LaunchParams;
use crate::model::modal::{Modal, ModalStack};
use crate::model::prediction::NETWORK_ERROR_MESSAGE;
use crate::model::{
    FormState, PanelContent, PanelKind, Panels, PredictionResponse, PredictionResult,
    ScrollTarget, ServerStatus, SubmissionOutcome, SubmissionPayload,
};
use crate::services::{HealthStatus, JobPoll, JobRunner, PredictionTransport, TransportError};
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Main application state - coordinates between components
pub struct App {
    pub config: Config,

    /// Flags read from the command line
    pub launch: LaunchParams,

    /// Carries submissions and health probes to the server
    transport: Arc<dyn PredictionTransport>,

    /// Result/error panel visibility and delayed scrolls
    pub panels: Panels,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// In-flight prediction; the submit control is disabled while pending
    pub prediction_runner: JobRunner<Result<PredictionResponse, TransportError>>,

    /// In-flight health probe
    pub health_runner: JobRunner<Result<HealthStatus, TransportError>>,

    pub server_status: ServerStatus,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Tick counter, drives the spinner
    pub tick: usize,

    /// First visible line of the page
    pub page_scroll: usize,

    /// Area to bring into view on the next draw
    pub scroll_target: Option<ScrollTarget>,

    /// Page viewport height from the last draw
    page_height: usize,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub form: FormComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App instance with the full clinical form
    pub fn new(config: Config, launch: LaunchParams, transport: Arc<dyn PredictionTransport>) -> App {
        Self::with_form(config, launch, transport, FormComponent::new(FormState::default()))
    }

    /// Create an App around a pre-built form
    pub fn with_form(
        config: Config,
        launch: LaunchParams,
        transport: Arc<dyn PredictionTransport>,
        form: FormComponent,
    ) -> App {
        App {
            config,
            launch,
            transport,
            panels: Panels::new(),
            modals: ModalStack::new(),
            prediction_runner: JobRunner::new(),
            health_runner: JobRunner::new(),
            server_status: ServerStatus::default(),
            should_quit: false,
            tick: 0,
            page_scroll: 0,
            scroll_target: None,
            page_height: 0,
            form,
            quit_dialog: QuitDialog::default(),
            help_dialog: HelpDialog::default(),
        }
    }

    /// Whether a prediction is in flight, i.e. the submit control is disabled
    pub fn is_loading(&self) -> bool {
        self.prediction_runner.is_pending()
    }

    fn scroll_delay(&self) -> Duration {
        Duration::from_millis(self.config.scroll_delay_ms)
    }

    /// Validate the form and send it off
    fn submit(&mut self) {
        if self.is_loading() {
            debug!("submit ignored, prediction already in flight");
            return;
        }

        if let Err(index) = self.form.state.check_constraints() {
            debug!(field = index, "submit blocked by constraint validation");
            self.form.state.focus_field(index);
            self.scroll_target = Some(ScrollTarget::Focus);
            return;
        }

        let payload = SubmissionPayload::from_form(&self.form.state);
        let replaced_panel = !self.panels.is_hidden();
        self.panels.hide_all();

        info!(
            url = %self.config.base_url,
            fields = payload.len(),
            replaced_panel,
            "submitting prediction request"
        );

        let transport = Arc::clone(&self.transport);
        self.prediction_runner
            .spawn(move || transport.predict(&payload));
    }

    fn start_health_probe(&mut self) {
        let transport = Arc::clone(&self.transport);
        if self.health_runner.spawn(move || transport.health()) {
            self.server_status = ServerStatus::Checking;
        }
    }

    fn poll_prediction(&mut self) {
        let elapsed = self.prediction_runner.elapsed();
        match self.prediction_runner.poll() {
            JobPoll::Idle | JobPoll::Pending => {}
            JobPoll::Finished(Ok(response)) => {
                debug!(?elapsed, "prediction response received");
                match SubmissionOutcome::from(response) {
                    SubmissionOutcome::Success(result) => self.show_result(result),
                    SubmissionOutcome::Failure(message) => self.show_error(message),
                }
            }
            JobPoll::Finished(Err(e)) => {
                error!(error = %e, "prediction request failed");
                self.show_error(NETWORK_ERROR_MESSAGE);
            }
            JobPoll::Lost => {
                error!("prediction worker exited without a result");
                self.show_error(NETWORK_ERROR_MESSAGE);
            }
        }
    }

    fn poll_health(&mut self) {
        match self.health_runner.poll() {
            JobPoll::Idle | JobPoll::Pending => {}
            JobPoll::Finished(Ok(health)) if health.is_healthy() => {
                info!(
                    model_loaded = health.model_loaded,
                    message = health.message.as_deref().unwrap_or(""),
                    "server is healthy"
                );
                self.server_status = ServerStatus::Healthy {
                    model_loaded: health.model_loaded,
                };
            }
            JobPoll::Finished(Ok(health)) => {
                warn!(status = %health.status, "server reported unhealthy");
                self.server_status = ServerStatus::Unreachable;
            }
            JobPoll::Finished(Err(e)) => {
                warn!(error = %e, "health probe failed");
                self.server_status = ServerStatus::Unreachable;
            }
            JobPoll::Lost => {
                self.server_status = ServerStatus::Unreachable;
            }
        }
    }

    fn show_result(&mut self, result: PredictionResult) {
        info!(
            prediction = result.prediction,
            probability_disease = result.probability_disease,
            "prediction succeeded"
        );
        let delay = self.scroll_delay();
        self.panels.show_result(result, delay, Instant::now());
    }

    fn show_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!(%message, "prediction failed");
        let delay = self.scroll_delay();
        self.panels.show_error(message, delay, Instant::now());
    }

    fn clear_form(&mut self) {
        self.form.state.clear();
        self.panels.hide_all();
        self.scroll_target = Some(ScrollTarget::Focus);
    }

    fn fill_demo_sample(&mut self) {
        let filled = self.form.state.fill_demo_sample();
        info!(filled, "filled demo sample");
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => {
                self.quit_dialog.request_pending = self.is_loading();
                self.quit_dialog.draw(frame, area)?;
            }
            Modal::Help => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }

    /// Draw the scrolling page: form, then whichever panel is visible
    fn draw_page(&mut self, frame: &mut Frame, area: Rect) {
        let form = self.form.lines(self.is_loading(), self.tick);
        let focus_span = form.focus_span;
        let mut lines = form.lines;

        let panel_span = match self.panels.content() {
            PanelContent::Hidden => None,
            PanelContent::Result(result) => {
                Some(push_panel(&mut lines, result_lines(result, area.width)))
            }
            PanelContent::Error(message) => {
                Some(push_panel(&mut lines, error_lines(message, area.width)))
            }
        };

        let height = area.height.saturating_sub(2) as usize;
        self.page_height = height;

        if let Some(target) = self.scroll_target.take() {
            let span = match target {
                ScrollTarget::Focus => Some(focus_span),
                ScrollTarget::ResultPanel | ScrollTarget::ErrorPanel => panel_span,
            };
            if let Some((start, end)) = span {
                self.page_scroll = scroll_to_reveal(self.page_scroll, start, end, height);
            }
        }

        let total = lines.len();
        let max_scroll = total.saturating_sub(height);
        self.page_scroll = self.page_scroll.min(max_scroll);

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Patient Data ")
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.page_scroll as u16, 0));
        frame.render_widget(paragraph, area);

        if total > height {
            let mut scrollbar_state = ScrollbarState::new(max_scroll).position(self.page_scroll);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }
    }
}

/// Append a panel after a blank separator, returning its line span
fn push_panel(lines: &mut Vec<Line<'static>>, panel: Vec<Line<'static>>) -> (usize, usize) {
    lines.push(Line::from(""));
    let start = lines.len();
    lines.extend(panel);
    (start, lines.len().saturating_sub(1).max(start))
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.form.init()?;

        if self.launch.demo {
            self.fill_demo_sample();
        }

        if self.config.probe_health {
            self.start_health_probe();
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(modal) = self.modals.top().cloned() {
            self.handle_modal_key_event(&modal, key)
        } else {
            self.form.handle_key_event(key)
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action != Action::Tick {
            debug!(%action, "action");
        }

        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                self.tick = self.tick.wrapping_add(1);
                self.poll_prediction();
                self.poll_health();
                if let Some(kind) = self.panels.take_due_scroll(Instant::now()) {
                    self.scroll_target = Some(match kind {
                        PanelKind::Result => ScrollTarget::ResultPanel,
                        PanelKind::Error => ScrollTarget::ErrorPanel,
                    });
                }
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {
                self.scroll_target = Some(ScrollTarget::Focus);
            }

            // ─────────────────────────────────────────────────────────────────
            // Form Editing (delegate to FormComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::FocusNext | Action::FocusPrev | Action::FieldInput(_) | Action::FieldBackspace => {
                self.form.update(action)?;
                self.scroll_target = Some(ScrollTarget::Focus);
            }

            // ─────────────────────────────────────────────────────────────────
            // Form Controls
            // ─────────────────────────────────────────────────────────────────
            Action::Submit => self.submit(),
            Action::ClearForm => self.clear_form(),
            Action::FillDemoSample => self.fill_demo_sample(),

            // ─────────────────────────────────────────────────────────────────
            // Scrolling
            // ─────────────────────────────────────────────────────────────────
            Action::ScrollUp => {
                self.scroll_target = None;
                self.page_scroll = self.page_scroll.saturating_sub(1);
            }
            Action::ScrollDown => {
                self.scroll_target = None;
                self.page_scroll = self.page_scroll.saturating_add(1);
            }
            Action::PageUp => {
                self.scroll_target = None;
                self.page_scroll = self.page_scroll.saturating_sub(self.page_height.max(1));
            }
            Action::PageDown => {
                self.scroll_target = None;
                self.page_scroll = self.page_scroll.saturating_add(self.page_height.max(1));
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_main_layout(area);

        draw_header(frame, layout.header, &self.server_status, &self.config.base_url);
        self.draw_page(frame, layout.page);
        draw_help_bar(frame, layout.help, self.is_loading());

        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::prediction::FALLBACK_ERROR_MESSAGE;
    use crate::model::feature::ClinicalFeature;
    use crate::model::FormFocus;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::sync::Mutex;
    use std::thread;

    /// Transport answering every request with a canned reply
    struct StubTransport {
        reply: Box<dyn Fn() -> Result<PredictionResponse, TransportError> + Send + Sync>,
        calls: AtomicUsize,
        last_payload: Mutex<Option<SubmissionPayload>>,
        /// When set, `predict` blocks until a message arrives
        gate: Mutex<Option<Receiver<()>>>,
    }

    impl StubTransport {
        fn replying(response: PredictionResponse) -> Self {
            Self::with(move || Ok(response.clone()))
        }

        fn with<F>(reply: F) -> Self
        where
            F: Fn() -> Result<PredictionResponse, TransportError> + Send + Sync + 'static,
        {
            Self {
                reply: Box::new(reply),
                calls: AtomicUsize::new(0),
                last_payload: Mutex::new(None),
                gate: Mutex::new(None),
            }
        }

        fn gated(mut self) -> (Self, Sender<()>) {
            let (tx, rx) = mpsc::channel();
            self.gate = Mutex::new(Some(rx));
            (self, tx)
        }
    }

    impl PredictionTransport for StubTransport {
        fn predict(&self, payload: &SubmissionPayload) -> Result<PredictionResponse, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_payload.lock().unwrap() = Some(payload.clone());
            if let Some(gate) = self.gate.lock().unwrap().as_ref() {
                let _ = gate.recv();
            }
            (self.reply)()
        }

        fn health(&self) -> Result<HealthStatus, TransportError> {
            Ok(HealthStatus {
                status: "healthy".to_string(),
                model_loaded: true,
                message: None,
            })
        }
    }

    fn test_config() -> Config {
        Config {
            probe_health: false,
            scroll_delay_ms: 0,
            ..Config::default()
        }
    }

    fn app_with(transport: Arc<StubTransport>) -> App {
        let mut app = App::new(test_config(), LaunchParams::default(), transport);
        app.init().unwrap();
        app
    }

    fn demo_app(transport: Arc<StubTransport>) -> App {
        let mut app = App::new(test_config(), LaunchParams { demo: true }, transport);
        app.init().unwrap();
        app
    }

    fn high_risk() -> PredictionResponse {
        PredictionResponse {
            success: true,
            prediction: Some(1),
            probability_no_disease: Some(0.18),
            probability_disease: Some(0.82),
            model_loaded: Some(true),
            ..PredictionResponse::default()
        }
    }

    /// Tick until the prediction job has been collected
    fn settle(app: &mut App) {
        for _ in 0..500 {
            app.update(Action::Tick).unwrap();
            if !app.is_loading() {
                // One more tick fires the zero-delay scroll
                app.update(Action::Tick).unwrap();
                return;
            }
            thread::sleep(Duration::from_millis(5));
        }
        panic!("prediction never finished");
    }

    fn render(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                app.draw(frame, frame.area()).unwrap();
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_high_risk_result_is_shown() {
        let transport = Arc::new(StubTransport::replying(high_risk()));
        let mut app = demo_app(transport.clone());

        app.update(Action::Submit).unwrap();
        assert!(app.is_loading());
        settle(&mut app);

        match app.panels.content() {
            PanelContent::Result(result) => {
                assert_eq!(result.risk_level().label(), "High Risk");
                assert_eq!(result.no_disease_percent(), "18.0%");
                assert_eq!(result.disease_percent(), "82.0%");
            }
            other => panic!("expected result panel, got {:?}", other),
        }
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);

        let payload = transport.last_payload.lock().unwrap().clone().unwrap();
        assert_eq!(payload.len(), 13);
        assert_eq!(payload.get("age"), Some("63"));
        assert_eq!(payload.get("oldpeak"), Some("2.3"));
    }

    #[test]
    fn test_low_risk_result() {
        let transport = Arc::new(StubTransport::replying(PredictionResponse {
            success: true,
            prediction: Some(0),
            probability_no_disease: Some(0.7),
            probability_disease: Some(0.3),
            ..PredictionResponse::default()
        }));
        let mut app = demo_app(transport);

        app.update(Action::Submit).unwrap();
        settle(&mut app);

        let text = render(&mut app, 100, 80);
        assert!(text.contains("Low Risk"));
        assert!(text.contains("70.0%"));
        assert!(text.contains("30.0%"));
    }

    #[test]
    fn test_server_error_message_is_shown() {
        let transport = Arc::new(StubTransport::replying(PredictionResponse {
            success: false,
            error: Some("Prediction error: bad input".to_string()),
            ..PredictionResponse::default()
        }));
        let mut app = demo_app(transport);

        app.update(Action::Submit).unwrap();
        settle(&mut app);

        assert_eq!(
            app.panels.content(),
            &PanelContent::Error("Prediction error: bad input".to_string())
        );
    }

    #[test]
    fn test_failure_without_message_uses_fallback() {
        let transport = Arc::new(StubTransport::replying(PredictionResponse::default()));
        let mut app = demo_app(transport);

        app.update(Action::Submit).unwrap();
        settle(&mut app);

        assert_eq!(
            app.panels.content(),
            &PanelContent::Error(FALLBACK_ERROR_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_network_error_reenables_submit() {
        let transport = Arc::new(StubTransport::with(|| {
            Err(TransportError::Network("connection refused".to_string()))
        }));
        let mut app = demo_app(transport.clone());

        app.update(Action::Submit).unwrap();
        settle(&mut app);

        assert_eq!(
            app.panels.content(),
            &PanelContent::Error(NETWORK_ERROR_MESSAGE.to_string())
        );
        assert!(!app.is_loading());

        app.update(Action::Submit).unwrap();
        settle(&mut app);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_worker_panic_reenables_submit() {
        let transport = Arc::new(StubTransport::with(|| panic!("worker died")));
        let mut app = demo_app(transport);

        app.update(Action::Submit).unwrap();
        settle(&mut app);

        assert!(!app.is_loading());
        assert_eq!(
            app.panels.content(),
            &PanelContent::Error(NETWORK_ERROR_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_submit_ignored_while_pending() {
        let (stub, release) = StubTransport::replying(high_risk()).gated();
        let transport = Arc::new(stub);
        let mut app = demo_app(transport.clone());

        app.update(Action::Submit).unwrap();
        app.update(Action::Submit).unwrap();
        app.update(Action::Tick).unwrap();
        assert!(app.is_loading());
        assert!(render(&mut app, 100, 60).contains("Analyzing..."));

        release.send(()).unwrap();
        settle(&mut app);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
        assert!(render(&mut app, 100, 60).contains("Predict Risk"));
    }

    #[test]
    fn test_submit_hides_previous_panel() {
        let (stub, release) = StubTransport::replying(high_risk()).gated();
        let mut app = demo_app(Arc::new(stub));
        app.panels.show_error("old", Duration::ZERO, Instant::now());

        app.update(Action::Submit).unwrap();
        assert!(app.panels.is_hidden());

        release.send(()).unwrap();
        settle(&mut app);
        assert!(matches!(app.panels.content(), PanelContent::Result(_)));
    }

    #[test]
    fn test_constraint_failure_blocks_submit() {
        let transport = Arc::new(StubTransport::replying(high_risk()));
        let mut app = demo_app(transport.clone());
        app.form.state.set_value(ClinicalFeature::Cholesterol, "");

        app.update(Action::Submit).unwrap();

        assert!(!app.is_loading());
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
        assert_eq!(app.form.state.focus, FormFocus::Field(4));
        assert_eq!(app.scroll_target, Some(ScrollTarget::Focus));
    }

    #[test]
    fn test_demo_flag_fills_form_on_init() {
        let transport = Arc::new(StubTransport::replying(high_risk()));
        let app = demo_app(transport.clone());
        assert_eq!(
            app.form.state.field(ClinicalFeature::StDepression).unwrap().value,
            "2.3"
        );

        let plain = app_with(transport);
        assert!(plain.form.state.fields.iter().all(|f| f.value.is_empty()));
        assert!(plain.form.state.has_clear_control);
    }

    #[test]
    fn test_demo_skips_fields_missing_from_form() {
        let form = FormComponent::new(FormState::with_features(&[
            ClinicalFeature::Age,
            ClinicalFeature::Sex,
        ]));
        let transport = Arc::new(StubTransport::replying(high_risk()));
        let mut app = App::with_form(test_config(), LaunchParams { demo: true }, transport, form);
        app.init().unwrap();

        assert_eq!(app.form.state.fields.len(), 2);
        assert_eq!(app.form.state.fields[0].value, "63");
        assert_eq!(app.form.state.fields[1].value, "1");
    }

    #[test]
    fn test_clear_form_hides_both_panels() {
        let transport = Arc::new(StubTransport::replying(high_risk()));
        let mut app = demo_app(transport);
        app.update(Action::Submit).unwrap();
        settle(&mut app);
        assert!(!app.panels.is_hidden());

        app.update(Action::ClearForm).unwrap();
        assert!(app.panels.is_hidden());
        assert!(app.form.state.fields.iter().all(|f| f.value.is_empty()));
        assert!(app.form.state.fields.iter().all(|f| f.invalid.is_none()));
    }

    #[test]
    fn test_clear_form_hides_error_panel_and_hidden_panels() {
        let transport = Arc::new(StubTransport::replying(PredictionResponse::default()));
        let mut app = demo_app(transport);

        // Nothing shown yet: clearing is still fine
        app.update(Action::ClearForm).unwrap();
        assert!(app.panels.is_hidden());

        app.form.state.fill_demo_sample();
        app.update(Action::Submit).unwrap();
        settle(&mut app);
        assert!(matches!(app.panels.content(), PanelContent::Error(_)));

        app.update(Action::ClearForm).unwrap();
        assert!(app.panels.is_hidden());
        assert!(!render(&mut app, 100, 60).contains(FALLBACK_ERROR_MESSAGE));
    }

    #[test]
    fn test_long_error_message_is_fully_visible() {
        let message = "Prediction error: X has 13 features, but KNeighborsClassifier \
                       is expecting 14 features as input.";
        let transport = Arc::new(StubTransport::replying(PredictionResponse {
            success: false,
            error: Some(message.to_string()),
            ..PredictionResponse::default()
        }));
        let mut app = demo_app(transport);

        app.update(Action::Submit).unwrap();
        settle(&mut app);

        let text = render(&mut app, 80, 60);
        assert!(text.contains("Prediction error: X has 13 features"));
        assert!(text.contains("as input."));
    }

    #[test]
    fn test_result_renders_badge_and_bars() {
        let transport = Arc::new(StubTransport::replying(high_risk()));
        let mut app = demo_app(transport);
        app.update(Action::Submit).unwrap();
        settle(&mut app);

        let text = render(&mut app, 100, 80);
        assert!(text.contains("High Risk"));
        assert!(text.contains("18.0%"));
        assert!(text.contains("82.0%"));
    }

    #[test]
    fn test_result_scrolls_into_view() {
        let transport = Arc::new(StubTransport::replying(high_risk()));
        let mut app = demo_app(transport);
        render(&mut app, 100, 20);
        assert_eq!(app.page_scroll, 0);

        app.update(Action::Submit).unwrap();
        settle(&mut app);
        let text = render(&mut app, 100, 20);

        assert!(app.page_scroll > 0);
        assert!(text.contains("Prediction Result"));
    }

    #[test]
    fn test_keys_route_to_top_modal() {
        let transport = Arc::new(StubTransport::replying(high_risk()));
        let mut app = app_with(transport);

        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let action = app.handle_key_event(q).unwrap().unwrap();
        app.update(action).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));

        let n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE);
        let action = app.handle_key_event(n).unwrap().unwrap();
        app.update(action).unwrap();
        assert!(app.modals.is_empty());

        let y = KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE);
        app.update(Action::OpenQuitDialog).unwrap();
        let action = app.handle_key_event(y).unwrap().unwrap();
        app.update(action).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_health_probe_updates_status() {
        let transport = Arc::new(StubTransport::replying(high_risk()));
        let config = Config {
            probe_health: true,
            ..test_config()
        };
        let mut app = App::new(config, LaunchParams::default(), transport);
        app.init().unwrap();
        assert_eq!(app.server_status, ServerStatus::Checking);

        for _ in 0..500 {
            app.update(Action::Tick).unwrap();
            if !app.health_runner.is_pending() {
                break;
            }
            thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(
            app.server_status,
            ServerStatus::Healthy { model_loaded: true }
        );
    }
}
