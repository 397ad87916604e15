use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_console::error;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::UseStateHandle;

use crate::api::{self, ApiError};
use crate::charts::{self, ChartJs, ChartPalette};
use crate::filter::DateRangeFilter;
use crate::models::{Summary, Transaction};
use crate::theme::Theme;
use crate::view_state::{ChartKind, ViewState};

/// Charts are redrawn shortly after a theme switch so the page repaint lands
/// first.
pub const THEME_RERENDER_DELAY_MS: u32 = 150;

/// Monotonically increasing token telling in-flight fetches whether their
/// filter is still the active one. A response that arrives after the filter
/// changed again is dropped instead of overwriting newer view state.
#[derive(Clone, Default)]
pub struct FetchGeneration(Rc<Cell<u64>>);

impl FetchGeneration {
    pub fn current(&self) -> u64 {
        self.0.get()
    }

    pub fn advance(&self) -> u64 {
        let next = self.0.get() + 1;
        self.0.set(next);
        next
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.0.get() == token
    }
}

/// Transient user-facing notification.
#[derive(Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(msg) | Notice::Error(msg) => msg,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Notice::Success(_) => "toast success",
            Notice::Error(_) => "toast error",
        }
    }
}

/// Orchestrates fetch → transform → render for the three dashboard regions.
/// Every refresh is independently triggerable and idempotent; on failure the
/// previously rendered state stays untouched.
#[derive(Clone)]
pub struct DataSync {
    view: Rc<RefCell<ViewState<ChartJs>>>,
    summary: UseStateHandle<Option<Summary>>,
    transactions: UseStateHandle<Vec<Transaction>>,
    theme: UseStateHandle<Theme>,
    notice: UseStateHandle<Option<Notice>>,
    generation: FetchGeneration,
    theme_rerender: Rc<RefCell<Option<Timeout>>>,
}

impl DataSync {
    /// `view`, `generation`, and `theme_rerender` must outlive any single
    /// render; the state handles are expected fresh from the current one.
    pub fn new(
        view: Rc<RefCell<ViewState<ChartJs>>>,
        generation: FetchGeneration,
        theme_rerender: Rc<RefCell<Option<Timeout>>>,
        summary: UseStateHandle<Option<Summary>>,
        transactions: UseStateHandle<Vec<Transaction>>,
        theme: UseStateHandle<Theme>,
        notice: UseStateHandle<Option<Notice>>,
    ) -> Self {
        DataSync {
            view,
            summary,
            transactions,
            theme,
            notice,
            generation,
            theme_rerender,
        }
    }

    pub fn filter(&self) -> DateRangeFilter {
        self.view.borrow().filter
    }

    /// Installs a new filter and re-fetches every region. Advancing the
    /// generation first invalidates whatever is still in flight.
    pub fn apply_filter(&self, filter: DateRangeFilter) {
        self.generation.advance();
        self.view.borrow_mut().set_filter(filter);
        self.refresh_all();
    }

    pub fn refresh_all(&self) {
        self.refresh_summary();
        self.refresh_transactions();
        self.refresh_charts();
    }

    pub fn refresh_summary(&self) {
        let this = self.clone();
        let token = this.generation.current();
        let filter = this.filter();
        spawn_local(async move {
            match api::fetch_summary(&filter).await {
                Ok(summary) if this.generation.is_current(token) => {
                    this.summary.set(Some(summary));
                }
                Ok(_) => {}
                Err(err) => this.report_failure("summary refresh failed", token, err),
            }
        });
    }

    pub fn refresh_transactions(&self) {
        let this = self.clone();
        let token = this.generation.current();
        let filter = this.filter();
        spawn_local(async move {
            match api::fetch_transactions(&filter).await {
                Ok(list) if this.generation.is_current(token) => {
                    this.transactions.set(list);
                }
                Ok(_) => {}
                Err(err) => this.report_failure("transaction refresh failed", token, err),
            }
        });
    }

    pub fn refresh_charts(&self) {
        let this = self.clone();
        let token = this.generation.current();
        let filter = this.filter();
        spawn_local(async move {
            let palette = ChartPalette::for_theme(*this.theme);

            match api::fetch_monthly_series(&filter).await {
                Ok(series) if this.generation.is_current(token) => {
                    let config = charts::monthly_chart_config(&series, &palette);
                    this.view
                        .borrow_mut()
                        .render_chart(&ChartJs, ChartKind::Monthly, Some(&config));
                }
                Ok(_) => {}
                Err(err) => this.report_failure("monthly chart refresh failed", token, err),
            }

            match api::fetch_category_series(&filter).await {
                Ok(series) if this.generation.is_current(token) => {
                    let config = if series.is_empty() {
                        None
                    } else {
                        Some(charts::category_chart_config(&series, &palette))
                    };
                    this.view.borrow_mut().render_chart(
                        &ChartJs,
                        ChartKind::Category,
                        config.as_ref(),
                    );
                }
                Ok(_) => {}
                Err(err) => this.report_failure("category chart refresh failed", token, err),
            }
        });
    }

    /// Debounced chart rebuild after a theme switch, so the new palette is
    /// picked up once the page colors have changed. Rapid toggles coalesce
    /// into one rebuild: installing the new timeout cancels the pending one.
    pub fn schedule_theme_rerender(&self) {
        let this = self.clone();
        let timeout = Timeout::new(THEME_RERENDER_DELAY_MS, move || {
            this.theme_rerender.borrow_mut().take();
            this.refresh_charts();
        });
        replace_pending(&self.theme_rerender, timeout);
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.notice.set(Some(Notice::Success(message.into())));
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        self.notice.set(Some(Notice::Error(message.into())));
    }

    fn report_failure(&self, context: &'static str, token: u64, err: ApiError) {
        error!(context, err.to_string());
        // A stale fetch failing is not worth a toast; the view it would have
        // fed was superseded anyway.
        if self.generation.is_current(token) {
            self.notify_error(err.to_string());
        }
    }
}

/// Installs the next pending value, dropping (and thereby cancelling) the
/// previous one.
fn replace_pending<T>(slot: &RefCell<Option<T>>, next: T) {
    *slot.borrow_mut() = Some(next);
}
