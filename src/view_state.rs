use serde_json::Value;

use crate::charts::{ChartBackend, CATEGORY_CANVAS, MONTHLY_CANVAS};
use crate::filter::DateRangeFilter;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ChartKind {
    Monthly,
    Category,
}

impl ChartKind {
    pub fn canvas_id(&self) -> &'static str {
        match self {
            ChartKind::Monthly => MONTHLY_CANVAS,
            ChartKind::Category => CATEGORY_CANVAS,
        }
    }
}

/// Everything the dashboard must keep consistent across async responses: the
/// active date filter and the live chart handles. At most one handle exists
/// per canvas; replacing a chart always disposes the old instance first.
pub struct ViewState<B: ChartBackend> {
    pub filter: DateRangeFilter,
    monthly: Option<B::Handle>,
    category: Option<B::Handle>,
}

impl<B: ChartBackend> Default for ViewState<B> {
    fn default() -> Self {
        ViewState {
            filter: DateRangeFilter::AllTime,
            monthly: None,
            category: None,
        }
    }
}

impl<B: ChartBackend> ViewState<B> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_filter(&mut self, filter: DateRangeFilter) {
        self.filter = filter;
    }

    fn slot(&mut self, kind: ChartKind) -> &mut Option<B::Handle> {
        match kind {
            ChartKind::Monthly => &mut self.monthly,
            ChartKind::Category => &mut self.category,
        }
    }

    /// Replaces the chart of the given kind. `None` stands for an empty
    /// series: the old instance is disposed, the canvas cleared, and no new
    /// handle is created.
    pub fn render_chart(&mut self, backend: &B, kind: ChartKind, config: Option<&Value>) {
        if let Some(old) = self.slot(kind).take() {
            backend.destroy(old);
        }
        match config {
            Some(config) => {
                *self.slot(kind) = backend.create(kind.canvas_id(), config);
            }
            None => backend.clear(kind.canvas_id()),
        }
    }

    /// Destroys whatever instances are still live. Must run before the
    /// canvases leave the document, otherwise the chart library keeps
    /// observing the detached elements.
    pub fn dispose(&mut self, backend: &B) {
        if let Some(old) = self.monthly.take() {
            backend.destroy(old);
        }
        if let Some(old) = self.category.take() {
            backend.destroy(old);
        }
    }

    pub fn has_chart(&self, kind: ChartKind) -> bool {
        match kind {
            ChartKind::Monthly => self.monthly.is_some(),
            ChartKind::Category => self.category.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Counts live handles and records the call order, standing in for the
    /// chart library.
    #[derive(Default)]
    struct MockBackend {
        live: Rc<Cell<usize>>,
        log: RefCell<Vec<String>>,
    }

    struct MockHandle {
        live: Rc<Cell<usize>>,
    }

    impl MockBackend {
        fn live(&self) -> usize {
            self.live.get()
        }

        fn log(&self) -> Vec<String> {
            self.log.borrow().clone()
        }
    }

    impl ChartBackend for MockBackend {
        type Handle = MockHandle;

        fn create(&self, canvas_id: &str, _config: &Value) -> Option<MockHandle> {
            self.live.set(self.live.get() + 1);
            self.log.borrow_mut().push(format!("create {}", canvas_id));
            Some(MockHandle {
                live: self.live.clone(),
            })
        }

        fn destroy(&self, handle: MockHandle) {
            handle.live.set(handle.live.get() - 1);
            self.log.borrow_mut().push("destroy".to_string());
        }

        fn clear(&self, canvas_id: &str) {
            self.log.borrow_mut().push(format!("clear {}", canvas_id));
        }
    }

    #[test]
    fn repeated_renders_keep_a_single_live_instance() {
        let backend = MockBackend::default();
        let mut view = ViewState::<MockBackend>::new();
        let config = json!({"type": "bar"});

        for _ in 0..5 {
            view.render_chart(&backend, ChartKind::Monthly, Some(&config));
            assert_eq!(backend.live(), 1);
        }
        assert!(view.has_chart(ChartKind::Monthly));
    }

    #[test]
    fn old_instance_is_destroyed_before_the_replacement_exists() {
        let backend = MockBackend::default();
        let mut view = ViewState::<MockBackend>::new();
        let config = json!({});

        view.render_chart(&backend, ChartKind::Monthly, Some(&config));
        view.render_chart(&backend, ChartKind::Monthly, Some(&config));
        assert_eq!(
            backend.log(),
            vec!["create monthly-chart", "destroy", "create monthly-chart"]
        );
    }

    #[test]
    fn empty_series_clears_the_canvas_and_leaves_no_handle() {
        let backend = MockBackend::default();
        let mut view = ViewState::<MockBackend>::new();
        let config = json!({});

        view.render_chart(&backend, ChartKind::Category, Some(&config));
        assert_eq!(backend.live(), 1);

        view.render_chart(&backend, ChartKind::Category, None);
        assert_eq!(backend.live(), 0);
        assert!(!view.has_chart(ChartKind::Category));
        assert!(backend
            .log()
            .last()
            .is_some_and(|entry| entry == "clear category-chart"));
    }

    #[test]
    fn dispose_destroys_every_live_instance() {
        let backend = MockBackend::default();
        let mut view = ViewState::<MockBackend>::new();
        let config = json!({});

        view.render_chart(&backend, ChartKind::Monthly, Some(&config));
        view.render_chart(&backend, ChartKind::Category, Some(&config));
        assert_eq!(backend.live(), 2);

        view.dispose(&backend);
        assert_eq!(backend.live(), 0);
        assert!(!view.has_chart(ChartKind::Monthly));
        assert!(!view.has_chart(ChartKind::Category));
    }

    #[test]
    fn the_two_canvases_hold_independent_handles() {
        let backend = MockBackend::default();
        let mut view = ViewState::<MockBackend>::new();
        let config = json!({});

        view.render_chart(&backend, ChartKind::Monthly, Some(&config));
        view.render_chart(&backend, ChartKind::Category, Some(&config));
        assert_eq!(backend.live(), 2);
        assert!(view.has_chart(ChartKind::Monthly));
        assert!(view.has_chart(ChartKind::Category));
    }
}
