use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlInputElement, HtmlSelectElement, InputEvent};
use yew::prelude::*;

mod api;
mod charts;
mod filter;
mod forms;
mod models;
mod registry;
mod sync;
mod theme;
mod view_state;

use charts::ChartJs;
use filter::DateRangeFilter;
use forms::{retain_category, DeleteState, EditState, TransactionDraft};
use models::{
    balance_card_class, format_currency, format_date, Summary, Transaction, TransactionKind,
};
use registry::CategoryRegistry;
use sync::{DataSync, FetchGeneration, Notice};
use theme::{apply_theme, load_theme, save_theme, Theme};
use view_state::ViewState;

#[derive(Clone, Copy, PartialEq)]
enum Page {
    Dashboard,
    AddTransaction,
}

#[function_component(App)]
fn app() -> Html {
    let active_page = use_state(|| Page::Dashboard);
    let theme = use_state(load_theme);
    let registry = use_state(|| None::<Rc<CategoryRegistry>>);
    let notice = use_state(|| None::<Notice>);

    {
        let theme = theme.clone();
        use_effect_with_deps(
            move |_| {
                apply_theme(*theme);
                || ()
            },
            (),
        );
    }

    // The category taxonomy must be resolved (server list or fallback) before
    // any category control is populated, so the pages are gated on it.
    {
        let registry = registry.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let loaded = CategoryRegistry::load().await;
                    registry.set(Some(Rc::new(loaded)));
                });
                || ()
            },
            (),
        );
    }

    let on_select = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| active_page.set(page))
    };

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = theme.toggled();
            save_theme(next);
            apply_theme(next);
            theme.set(next);
        })
    };

    let content = match (&*registry, *active_page) {
        (None, _) => html! { <div class="loading-shell">{"Loading..."}</div> },
        (Some(registry), Page::Dashboard) => html! {
            <DashboardPage registry={registry.clone()} theme={theme.clone()} notice={notice.clone()} />
        },
        (Some(registry), Page::AddTransaction) => html! {
            <AddTransactionPage registry={registry.clone()} notice={notice.clone()} />
        },
    };

    html! {
        <div class="app">
            <Header
                active_page={*active_page}
                on_select={on_select}
                theme={*theme}
                on_toggle_theme={on_toggle_theme}
            />
            <main class="content">{ content }</main>
            <ToastHost notice={notice} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    active_page: Page,
    on_select: Callback<Page>,
    theme: Theme,
    on_toggle_theme: Callback<MouseEvent>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let nav_button = |label: &'static str, page: Page| {
        let on_select = props.on_select.clone();
        let class = if props.active_page == page {
            "nav-link active"
        } else {
            "nav-link"
        };
        html! {
            <button type="button" class={class} onclick={Callback::from(move |_| on_select.emit(page))}>
                { label }
            </button>
        }
    };

    html! {
        <header class="app-header">
            <span class="brand">{"FinTrack"}</span>
            <nav class="nav">
                { nav_button("Dashboard", Page::Dashboard) }
                { nav_button("Add Transaction", Page::AddTransaction) }
            </nav>
            <button
                type="button"
                class="theme-toggle"
                title="Toggle theme"
                onclick={props.on_toggle_theme.clone()}
            >
                { if props.theme == Theme::Dark { icon_sun() } else { icon_moon() } }
            </button>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct ToastHostProps {
    notice: UseStateHandle<Option<Notice>>,
}

#[function_component(ToastHost)]
fn toast_host(props: &ToastHostProps) -> Html {
    {
        let notice = props.notice.clone();
        use_effect_with_deps(
            move |current: &Option<Notice>| {
                let timeout = current.as_ref().map(|_| {
                    let notice = notice.clone();
                    Timeout::new(4000, move || notice.set(None))
                });
                move || drop(timeout)
            },
            (*props.notice).clone(),
        );
    }

    match &*props.notice {
        Some(notice) => html! {
            <div class={notice.css_class()} role="status">{ notice.message() }</div>
        },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
struct DashboardProps {
    registry: Rc<CategoryRegistry>,
    theme: UseStateHandle<Theme>,
    notice: UseStateHandle<Option<Notice>>,
}

#[function_component(DashboardPage)]
fn dashboard_page(props: &DashboardProps) -> Html {
    let summary = use_state(|| None::<Summary>);
    let transactions = use_state(Vec::<Transaction>::new);
    let view = use_mut_ref(ViewState::<ChartJs>::new);
    // The generation counter and the pending rerender slot survive
    // re-renders; resetting either per render would break the stale-token
    // check and the theme debounce.
    let generation = use_mut_ref(FetchGeneration::default);
    let pending_rerender = use_mut_ref(|| None);

    let start_input = use_state(String::new);
    let end_input = use_state(String::new);
    let filter_error = use_state(|| None::<String>);

    let edit_state = use_state(|| EditState::Closed);
    let delete_state = use_state(|| DeleteState::Closed);

    let sync = DataSync::new(
        view.clone(),
        generation.borrow().clone(),
        pending_rerender.clone(),
        summary.clone(),
        transactions.clone(),
        props.theme.clone(),
        props.notice.clone(),
    );

    // Charts bound to the canvases must not outlive them; unmounting the
    // dashboard disposes whatever is still live.
    {
        let sync = sync.clone();
        let view = view.clone();
        use_effect_with_deps(
            move |_| {
                sync.refresh_all();
                move || view.borrow_mut().dispose(&ChartJs)
            },
            (),
        );
    }

    // Theme watcher: rebuild live charts with the new palette, debounced so
    // the page repaint lands first. Skips the mount run — the initial
    // refresh_all above already draws them.
    {
        let sync = sync.clone();
        let mounted = use_mut_ref(|| false);
        use_effect_with_deps(
            move |_| {
                if *mounted.borrow() {
                    sync.schedule_theme_rerender();
                } else {
                    *mounted.borrow_mut() = true;
                }
                || ()
            },
            *props.theme,
        );
    }

    let on_apply_filter = {
        let start_input = start_input.clone();
        let end_input = end_input.clone();
        let filter_error = filter_error.clone();
        let sync = sync.clone();
        Callback::from(
            move |_| match DateRangeFilter::from_inputs(&start_input, &end_input) {
                Ok(filter) => {
                    filter_error.set(None);
                    sync.apply_filter(filter);
                }
                Err(err) => filter_error.set(Some(err.to_string())),
            },
        )
    };

    let on_clear_filter = {
        let start_input = start_input.clone();
        let end_input = end_input.clone();
        let filter_error = filter_error.clone();
        let sync = sync.clone();
        Callback::from(move |_| {
            start_input.set(String::new());
            end_input.set(String::new());
            filter_error.set(None);
            sync.apply_filter(DateRangeFilter::AllTime);
        })
    };

    let on_export = {
        let sync = sync.clone();
        Callback::from(move |_| {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .location()
                    .set_href(&api::export_csv_url(&sync.filter()));
            }
        })
    };

    let on_import = {
        let sync = sync.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|list| list.get(0)) {
                input.set_value("");
                if let Ok(form) = FormData::new() {
                    if form.append_with_blob("file", &file).is_ok() {
                        let sync = sync.clone();
                        spawn_local(async move {
                            match api::import_csv(form).await {
                                Ok(resp) => {
                                    sync.notify_success(
                                        resp.message.unwrap_or_else(|| "CSV imported".to_string()),
                                    );
                                    sync.refresh_all();
                                }
                                Err(err) => sync.notify_error(err.to_string()),
                            }
                        });
                    }
                }
            }
        })
    };

    let on_edit_open = {
        let edit_state = edit_state.clone();
        let sync = sync.clone();
        Callback::from(move |id: i64| {
            let edit_state = edit_state.clone();
            let sync = sync.clone();
            spawn_local(async move {
                match api::fetch_transaction(id).await {
                    Ok(tx) => edit_state.set(EditState::opened(&tx)),
                    // A failed fetch aborts opening; the modal stays closed.
                    Err(err) => sync.notify_error(err.to_string()),
                }
            });
        })
    };

    let on_delete_open = {
        let delete_state = delete_state.clone();
        let sync = sync.clone();
        Callback::from(move |id: i64| {
            let delete_state = delete_state.clone();
            let sync = sync.clone();
            spawn_local(async move {
                match api::fetch_transaction(id).await {
                    Ok(tx) => delete_state.set(DeleteState::opened(tx)),
                    Err(err) => sync.notify_error(err.to_string()),
                }
            });
        })
    };

    let filter_bar = html! {
        <div class="filter-bar">
            <label>{"From"}
                <input type="date" value={(*start_input).clone()} oninput={{
                    let start_input = start_input.clone();
                    Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        start_input.set(input.value());
                    })
                }} />
            </label>
            <label>{"To"}
                <input type="date" value={(*end_input).clone()} oninput={{
                    let end_input = end_input.clone();
                    Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        end_input.set(input.value());
                    })
                }} />
            </label>
            <button type="button" class="btn primary" onclick={on_apply_filter}>{"Apply"}</button>
            <button type="button" class="btn" onclick={on_clear_filter}>{"Clear"}</button>
            {
                if let Some(msg) = &*filter_error {
                    html! { <span class="field-error">{ msg.clone() }</span> }
                } else {
                    html! {}
                }
            }
            <span class="spacer"></span>
            <button type="button" class="btn" onclick={on_export}>{"Export CSV"}</button>
            <label class="btn file-label">{"Import CSV"}
                <input type="file" accept=".csv" onchange={on_import} />
            </label>
        </div>
    };

    let summary_cards = match &*summary {
        Some(data) => html! {
            <div class="summary-grid">
                <div class="summary-card income">
                    <p>{"Total Income"}</p>
                    <h3>{ format_currency(data.total_income) }</h3>
                </div>
                <div class="summary-card expense">
                    <p>{"Total Expense"}</p>
                    <h3>{ format_currency(data.total_expense) }</h3>
                </div>
                <div class={balance_card_class(data.balance)}>
                    <p>{"Balance"}</p>
                    <h3>{ format_currency(data.balance) }</h3>
                </div>
            </div>
        },
        None => html! {
            <div class="summary-grid">
                <div class="summary-card">{"Loading summary..."}</div>
            </div>
        },
    };

    html! {
        <div class="dashboard">
            { filter_bar }
            { summary_cards }
            <div class="chart-grid">
                <div class="card chart-card">
                    <h3>{"Income vs Expenses by Month"}</h3>
                    <div class="chart-holder">
                        <canvas id={charts::MONTHLY_CANVAS}></canvas>
                    </div>
                </div>
                <div class="card chart-card">
                    <h3>{"Expenses by Category"}</h3>
                    <div class="chart-holder">
                        <canvas id={charts::CATEGORY_CANVAS}></canvas>
                    </div>
                </div>
            </div>
            <TransactionTable
                transactions={(*transactions).clone()}
                on_edit={on_edit_open}
                on_delete={on_delete_open}
            />
            <EditModal
                state={edit_state}
                registry={props.registry.clone()}
                sync={SyncHandle(sync.clone())}
            />
            <DeleteModal state={delete_state} sync={SyncHandle(sync)} />
        </div>
    }
}

/// Wrapper so `DataSync` can travel through component props. The handles it
/// carries are stable for the owning component's lifetime, so prop equality
/// is a constant.
#[derive(Clone)]
struct SyncHandle(DataSync);

impl PartialEq for SyncHandle {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[derive(Properties, PartialEq)]
struct TransactionTableProps {
    transactions: Vec<Transaction>,
    on_edit: Callback<i64>,
    on_delete: Callback<i64>,
}

#[function_component(TransactionTable)]
fn transaction_table(props: &TransactionTableProps) -> Html {
    html! {
        <div class="card table-card">
            <h3>{"Transactions"}</h3>
            <table class="transactions">
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th>{"Category"}</th>
                        <th>{"Type"}</th>
                        <th>{"Amount"}</th>
                        <th>{"Notes"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { if props.transactions.is_empty() {
                        html! {
                            <tr><td colspan="6" class="empty">{"No transactions found"}</td></tr>
                        }
                    } else {
                        // Category and notes are server-sourced text; they are
                        // rendered as text nodes only, never as markup.
                        html! {
                            <>
                                { for props.transactions.iter().map(|tx| {
                                    let on_edit = props.on_edit.clone();
                                    let on_delete = props.on_delete.clone();
                                    let id = tx.id;
                                    let (amount_class, sign) = match tx.kind {
                                        TransactionKind::Income => ("amount income", "+"),
                                        TransactionKind::Expense => ("amount expense", "-"),
                                    };
                                    html! {
                                        <tr key={tx.id}>
                                            <td>{ format_date(&tx.date) }</td>
                                            <td>{ tx.category.clone() }</td>
                                            <td><span class={format!("badge {}", tx.kind.as_str())}>{ tx.kind.label() }</span></td>
                                            <td class={amount_class}>{ format!("{}{}", sign, format_currency(tx.amount)) }</td>
                                            <td>{ tx.notes.clone().filter(|n| !n.is_empty()).unwrap_or_else(|| "-".to_string()) }</td>
                                            <td class="row-actions">
                                                <button type="button" class="btn small" onclick={Callback::from(move |_| on_edit.emit(id))}>{"Edit"}</button>
                                                <button type="button" class="btn small danger" onclick={Callback::from(move |_| on_delete.emit(id))}>{"Delete"}</button>
                                            </td>
                                        </tr>
                                    }
                                }) }
                            </>
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}

fn category_options(registry: &CategoryRegistry, kind: &str, selected: &str) -> Html {
    html! {
        <>
            <option value="" selected={selected.is_empty()}>{"Select category..."}</option>
            { for registry.options_for(kind).iter().map(|name| html! {
                <option value={name.clone()} selected={name.as_str() == selected}>{ name.clone() }</option>
            }) }
        </>
    }
}

#[derive(Properties, PartialEq)]
struct EditModalProps {
    state: UseStateHandle<EditState>,
    registry: Rc<CategoryRegistry>,
    sync: SyncHandle,
}

#[function_component(EditModal)]
fn edit_modal(props: &EditModalProps) -> Html {
    let state = props.state.clone();
    let (id, draft, error, submitting) = match &*state {
        EditState::Closed => return html! {},
        EditState::Open { id, draft, error } => (*id, draft.clone(), error.clone(), false),
        EditState::Submitting { id, draft } => (*id, draft.clone(), None, true),
    };

    let set_field = |apply: fn(&mut TransactionDraft, String)| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let EditState::Open { id, mut draft, error } = (*state).clone() {
                apply(&mut draft, input.value());
                state.set(EditState::Open { id, draft, error });
            }
        })
    };

    // Changing the type refills the category options; the old selection
    // survives only if the new type still lists it.
    let on_kind_change = {
        let state = state.clone();
        let registry = props.registry.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let EditState::Open { id, mut draft, error } = (*state).clone() {
                draft.kind = select.value();
                draft.category =
                    retain_category(&draft.category, registry.options_for(&draft.kind))
                        .unwrap_or_default();
                state.set(EditState::Open { id, draft, error });
            }
        })
    };

    let on_category_change = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let EditState::Open { id, mut draft, error } = (*state).clone() {
                draft.category = select.value();
                state.set(EditState::Open { id, draft, error });
            }
        })
    };

    let on_cancel = {
        let state = state.clone();
        Callback::from(move |_| state.set(EditState::Closed))
    };

    let on_save = {
        let state = state.clone();
        let sync = props.sync.0.clone();
        Callback::from(move |_| {
            let (next, action) = (*state).clone().begin_submit();
            state.set(next.clone());
            if let Some((id, payload)) = action {
                let state = state.clone();
                let sync = sync.clone();
                spawn_local(async move {
                    match api::update_transaction(id, &payload).await {
                        Ok(_) => {
                            state.set(EditState::Closed);
                            sync.notify_success("Transaction updated");
                            sync.refresh_all();
                        }
                        Err(err) => state.set(next.submit_failed(err.to_string())),
                    }
                });
            }
        })
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal card">
                <h3>{ format!("Edit Transaction #{}", id) }</h3>
                <div class="form-grid">
                    <label>{"Amount"}
                        <input
                            type="number"
                            step="0.01"
                            min="0"
                            value={draft.amount.clone()}
                            oninput={set_field(|d, v| d.amount = v)}
                            disabled={submitting}
                        />
                    </label>
                    <label>{"Type"}
                        <select onchange={on_kind_change} disabled={submitting}>
                            <option value="" selected={draft.kind.is_empty()}>{"Select type..."}</option>
                            <option value="income" selected={draft.kind == "income"}>{"Income"}</option>
                            <option value="expense" selected={draft.kind == "expense"}>{"Expense"}</option>
                        </select>
                    </label>
                    <label>{"Category"}
                        <select onchange={on_category_change} disabled={submitting}>
                            { category_options(&props.registry, &draft.kind, &draft.category) }
                        </select>
                    </label>
                    <label>{"Date"}
                        <input
                            type="date"
                            value={draft.date.clone()}
                            oninput={set_field(|d, v| d.date = v)}
                            disabled={submitting}
                        />
                    </label>
                    <label class="wide">{"Notes"}
                        <input
                            type="text"
                            value={draft.notes.clone()}
                            oninput={set_field(|d, v| d.notes = v)}
                            disabled={submitting}
                        />
                    </label>
                </div>
                {
                    if let Some(msg) = &error {
                        html! { <p class="field-error">{ msg.clone() }</p> }
                    } else {
                        html! {}
                    }
                }
                <div class="modal-actions">
                    <button type="button" class="btn" onclick={on_cancel} disabled={submitting}>{"Cancel"}</button>
                    <button type="button" class="btn primary" onclick={on_save} disabled={submitting}>
                        { if submitting { "Saving..." } else { "Save Changes" } }
                    </button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DeleteModalProps {
    state: UseStateHandle<DeleteState>,
    sync: SyncHandle,
}

#[function_component(DeleteModal)]
fn delete_modal(props: &DeleteModalProps) -> Html {
    let state = props.state.clone();
    let (record, error, confirming) = match &*state {
        DeleteState::Closed => return html! {},
        DeleteState::Open { record, error } => (record.clone(), error.clone(), false),
        DeleteState::Confirming { record } => (record.clone(), None, true),
    };

    let on_cancel = {
        let state = state.clone();
        Callback::from(move |_| state.set(DeleteState::Closed))
    };

    let on_confirm = {
        let state = state.clone();
        let sync = props.sync.0.clone();
        Callback::from(move |_| {
            let (next, action) = (*state).clone().begin_confirm();
            state.set(next.clone());
            if let Some(id) = action {
                let state = state.clone();
                let sync = sync.clone();
                spawn_local(async move {
                    match api::delete_transaction(id).await {
                        Ok(_) => {
                            state.set(DeleteState::Closed);
                            sync.notify_success("Transaction deleted");
                            sync.refresh_all();
                        }
                        Err(err) => state.set(next.confirm_failed(err.to_string())),
                    }
                });
            }
        })
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal card">
                <h3>{"Delete Transaction"}</h3>
                <p>
                    { "Delete the " }
                    <strong>{ record.category.clone() }</strong>
                    { format!(" {} of ", record.kind.as_str()) }
                    <strong>{ format_currency(record.amount) }</strong>
                    { format!(" on {}?", format_date(&record.date)) }
                </p>
                {
                    if let Some(msg) = &error {
                        html! { <p class="field-error">{ msg.clone() }</p> }
                    } else {
                        html! {}
                    }
                }
                <div class="modal-actions">
                    <button type="button" class="btn" onclick={on_cancel} disabled={confirming}>{"Cancel"}</button>
                    <button type="button" class="btn danger" onclick={on_confirm} disabled={confirming}>
                        { if confirming { "Deleting..." } else { "Delete" } }
                    </button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AddPageProps {
    registry: Rc<CategoryRegistry>,
    notice: UseStateHandle<Option<Notice>>,
}

#[function_component(AddTransactionPage)]
fn add_transaction_page(props: &AddPageProps) -> Html {
    let draft = use_state(TransactionDraft::seeded);
    let form_error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let set_field = |apply: fn(&mut TransactionDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            apply(&mut next, input.value());
            draft.set(next);
        })
    };

    // No category selection survives a type change on the add form.
    let on_kind_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.kind = select.value();
            next.category = String::new();
            draft.set(next);
        })
    };

    let on_category_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.category = select.value();
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let form_error = form_error.clone();
        let saving = saving.clone();
        let notice = props.notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // Validation failures short-circuit before any network call;
            // the form keeps its values.
            let payload = match draft.validate() {
                Ok(payload) => payload,
                Err(err) => {
                    form_error.set(Some(err.to_string()));
                    return;
                }
            };

            form_error.set(None);
            saving.set(true);

            let draft = draft.clone();
            let form_error = form_error.clone();
            let saving = saving.clone();
            let notice = notice.clone();
            spawn_local(async move {
                match api::create_transaction(&payload).await {
                    Ok(resp) => {
                        notice.set(Some(Notice::Success(
                            resp.message
                                .unwrap_or_else(|| "Transaction added".to_string()),
                        )));
                        draft.set(TransactionDraft::seeded());
                    }
                    Err(err) => form_error.set(Some(err.to_string())),
                }
                saving.set(false);
            });
        })
    };

    html! {
        <div class="card form-card">
            <h3>{"Add Transaction"}</h3>
            <form onsubmit={on_submit}>
                <div class="form-grid">
                    <label>{"Amount"}
                        <input
                            type="number"
                            step="0.01"
                            min="0"
                            placeholder="0.00"
                            value={draft.amount.clone()}
                            oninput={set_field(|d, v| d.amount = v)}
                        />
                    </label>
                    <label>{"Type"}
                        <select onchange={on_kind_change}>
                            <option value="" selected={draft.kind.is_empty()}>{"Select type..."}</option>
                            <option value="income" selected={draft.kind == "income"}>{"Income"}</option>
                            <option value="expense" selected={draft.kind == "expense"}>{"Expense"}</option>
                        </select>
                    </label>
                    <label>{"Category"}
                        <select onchange={on_category_change}>
                            { category_options(&props.registry, &draft.kind, &draft.category) }
                        </select>
                    </label>
                    <label>{"Date"}
                        <input
                            type="date"
                            value={draft.date.clone()}
                            oninput={set_field(|d, v| d.date = v)}
                        />
                    </label>
                    <label class="wide">{"Notes (optional)"}
                        <input
                            type="text"
                            placeholder="What was this for?"
                            value={draft.notes.clone()}
                            oninput={set_field(|d, v| d.notes = v)}
                        />
                    </label>
                </div>
                {
                    if let Some(msg) = &*form_error {
                        html! { <p class="field-error">{ msg.clone() }</p> }
                    } else {
                        html! {}
                    }
                }
                <button type="submit" class="btn primary" disabled={*saving}>
                    { if *saving { "Saving..." } else { "Add Transaction" } }
                </button>
            </form>
        </div>
    }
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

fn icon_moon() -> Html {
    icon_base("M21 12.79A9 9 0 1111.21 3a7 7 0 109.79 9.79z")
}

fn icon_sun() -> Html {
    icon_base("M12 12m-4 0a4 4 0 108 0 4 4 0 10-8 0M12 1v3M12 20v3M4.2 4.2l2.1 2.1M17.7 17.7l2.1 2.1M1 12h3M20 12h3M4.2 19.8l2.1-2.1M17.7 6.3l2.1-2.1")
}

fn main() {
    yew::Renderer::<App>::new().render();
}
