use leptos::html::Ul;
use leptos::*;
use std::rc::Rc;
use strum::IntoEnumIterator;

use crate::{
    application::{
        CompanyListItem, DashboardView, ScrollShadow, SelectionController, StatField, StatsDisplay,
    },
    domain::{
        logging::LogComponent,
        market_data::{Company, DisplayOptions, INTERVAL_CHOICES, PERIOD_CHOICES},
    },
    infrastructure::{
        config::DashboardConfig, http::HttpMarketDataRepository, rendering::CanvasLineChart,
    },
};
use crate::{log_debug, log_error, log_warn};

pub const CHART_CANVAS_ID: &str = "chart";

type Dashboard = SelectionController<HttpMarketDataRepository, LeptosDashboardView, CanvasLineChart>;

/// Signal-backed page surface. Reads are untracked so the controller never
/// subscribes to its own output.
#[derive(Clone, Copy)]
pub struct LeptosDashboardView {
    selected_label: RwSignal<String>,
    companies: RwSignal<Vec<CompanyListItem>>,
    stats: RwSignal<StatsDisplay>,
    filter: RwSignal<String>,
    period: RwSignal<String>,
    interval: RwSignal<String>,
}

impl LeptosDashboardView {
    pub fn new(options: DisplayOptions) -> Self {
        Self {
            selected_label: create_rw_signal(String::new()),
            companies: create_rw_signal(Vec::new()),
            stats: create_rw_signal(StatsDisplay::default()),
            filter: create_rw_signal(String::new()),
            period: create_rw_signal(options.period),
            interval: create_rw_signal(options.interval),
        }
    }
}

impl DashboardView for LeptosDashboardView {
    fn filter_text(&self) -> String {
        self.filter.get_untracked()
    }

    fn display_options(&self) -> DisplayOptions {
        DisplayOptions::new(self.period.get_untracked(), self.interval.get_untracked())
    }

    fn set_selected_label(&self, label: String) {
        self.selected_label.set(label);
    }

    fn render_company_list(&self, items: Vec<CompanyListItem>) {
        self.companies.set(items);
    }

    fn show_stats(&self, stats: StatsDisplay) {
        self.stats.set(stats);
    }

    fn alert(&self, message: &str) {
        if let Err(err) = gloo::utils::window().alert_with_message(message) {
            log_warn!(LogComponent::Presentation("Alert"), "alert() failed: {:?}", err);
        }
    }
}

/// Runs a controller future on the local executor and logs whatever error it returns.
fn spawn_logged<F, T>(task: &'static str, future: F)
where
    F: std::future::Future<Output = crate::domain::errors::DashboardResult<T>> + 'static,
    T: std::fmt::Debug,
{
    spawn_local(async move {
        match future.await {
            Ok(outcome) => {
                log_debug!(LogComponent::Presentation("Dashboard"), "{} finished: {:?}", task, outcome);
            }
            Err(err) => {
                log_error!(LogComponent::Presentation("Dashboard"), "{} failed: {}", task, err);
            }
        }
    });
}

/// Root component: sidebar with the company list, header, stats and chart.
#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let view = LeptosDashboardView::new(config.display_options());
    let dashboard: Rc<Dashboard> = Rc::new(SelectionController::new(
        HttpMarketDataRepository::new(config.api_base.clone()),
        view,
        CanvasLineChart::new(CHART_CANVAS_ID),
        config.number_format(),
    ));

    let loader = dashboard.clone();
    spawn_logged("Initial load", async move { loader.init().await });

    view! {
        <style>{STYLE}</style>
        <div class="dashboard">
            <Sidebar dashboard=dashboard.clone() view=view />
            <main class="content">
                <header class="content-header">
                    <h2 id="selectedName">{move || view.selected_label.get()}</h2>
                    <OptionsBar dashboard=dashboard view=view />
                </header>
                <StatsPanel view=view />
                <div class="chart-wrapper">
                    <canvas id=CHART_CANVAS_ID></canvas>
                </div>
            </main>
        </div>
    }
}

#[component]
fn Sidebar(dashboard: Rc<Dashboard>, view: LeptosDashboardView) -> impl IntoView {
    let list_ref = create_node_ref::<Ul>();

    let update_shadow = move || {
        if let Some(list) = list_ref.get_untracked() {
            let element: &web_sys::HtmlElement = &list;
            apply_scroll_shadow(element);
        }
    };

    // List content changes can make it overflow (or stop overflowing).
    create_effect(move |_| {
        view.companies.with(|_| ());
        request_animation_frame(update_shadow);
    });

    let search = dashboard.clone();
    view! {
        <aside class="sidebar">
            <input
                id="search"
                type="search"
                placeholder="Search companies"
                prop:value=move || view.filter.get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    view.filter.set(text.clone());
                    search.filter_changed(&text);
                }
            />
            <ul
                id="companyList"
                class="company-list"
                node_ref=list_ref
                on:scroll=move |_| update_shadow()
            >
                <For
                    each=move || view.companies.get()
                    key=|item| (item.company.ticker.clone(), item.active)
                    children=move |item: CompanyListItem| {
                        let dashboard = dashboard.clone();
                        let company: Company = item.company.clone();
                        view! {
                            <li
                                class:active=item.active
                                on:click=move |_| {
                                    let dashboard = dashboard.clone();
                                    let company = company.clone();
                                    spawn_logged("Select company", async move {
                                        dashboard.select_company(company).await
                                    });
                                }
                            >
                                {item.label}
                            </li>
                        }
                    }
                />
            </ul>
        </aside>
    }
}

fn apply_scroll_shadow(element: &web_sys::HtmlElement) {
    let shadow = ScrollShadow::from_metrics(
        element.scroll_top() as f64,
        element.scroll_height() as f64,
        element.client_height() as f64,
    );
    let style = element.style();
    for (property, value) in shadow.properties() {
        if let Err(err) = style.set_property(property, &value) {
            log_warn!(LogComponent::Presentation("Sidebar"), "Failed to set {}: {:?}", property, err);
        }
    }
}

#[component]
fn OptionsBar(dashboard: Rc<Dashboard>, view: LeptosDashboardView) -> impl IntoView {
    let reload = move |dashboard: Rc<Dashboard>| {
        spawn_logged("Reload options", async move { dashboard.options_changed().await });
    };
    let on_period = {
        let dashboard = dashboard.clone();
        move |ev: web_sys::Event| {
            view.period.set(event_target_value(&ev));
            reload(dashboard.clone());
        }
    };
    let on_interval = move |ev: web_sys::Event| {
        view.interval.set(event_target_value(&ev));
        reload(dashboard.clone());
    };

    view! {
        <div class="options">
            <label>
                "Period "
                <select id="period" prop:value=move || view.period.get() on:change=on_period>
                    {choice_options(PERIOD_CHOICES, view.period)}
                </select>
            </label>
            <label>
                "Interval "
                <select id="interval" prop:value=move || view.interval.get() on:change=on_interval>
                    {choice_options(INTERVAL_CHOICES, view.interval)}
                </select>
            </label>
        </div>
    }
}

fn choice_options(choices: &'static [&'static str], current: RwSignal<String>) -> impl IntoView {
    choices
        .iter()
        .map(|choice| {
            view! {
                <option value=*choice selected=move || current.get() == *choice>
                    {*choice}
                </option>
            }
        })
        .collect_view()
}

#[component]
fn StatsPanel(view: LeptosDashboardView) -> impl IntoView {
    view! {
        <div class="stats">
            {StatField::iter()
                .map(|field| {
                    view! {
                        <div class="stat">
                            <div class="stat-label">{field.to_string()}</div>
                            <div class="stat-value" id=field.element_id()>
                                {move || view.stats.with(|stats| stats.get(field).to_string())}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
        <div class="prediction-note">
            {move || view.stats.with(|stats| stats.prediction_note.clone().unwrap_or_default())}
        </div>
    }
}

/// Mounts the dashboard into `<body>`.
pub fn mount(config: DashboardConfig) {
    mount_to_body(move || view! { <App config=config /> });
}

const STYLE: &str = r#"
.dashboard {
    display: flex;
    height: 100vh;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    color: #1f2933;
}

.sidebar {
    width: 280px;
    display: flex;
    flex-direction: column;
    gap: 8px;
    padding: 16px;
    border-right: 1px solid #e4e7eb;
}

.sidebar input {
    padding: 8px;
    border: 1px solid #cbd2d9;
    border-radius: 6px;
}

.company-list {
    --top-shadow-opacity: 0;
    --bottom-shadow-opacity: 0;
    flex: 1;
    overflow-y: auto;
    margin: 0;
    padding: 0;
    list-style: none;
    box-shadow:
        inset 0 12px 8px -8px rgba(0, 0, 0, calc(0.2 * var(--top-shadow-opacity))),
        inset 0 -12px 8px -8px rgba(0, 0, 0, calc(0.2 * var(--bottom-shadow-opacity)));
}

.company-list li {
    padding: 8px 10px;
    border-radius: 6px;
    cursor: pointer;
}

.company-list li:hover {
    background: #f0f4f8;
}

.company-list li.active {
    background: #2680c2;
    color: white;
}

.content {
    flex: 1;
    display: flex;
    flex-direction: column;
    padding: 16px 24px;
    min-width: 0;
}

.content-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.options {
    display: flex;
    gap: 16px;
}

.stats {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 12px;
    margin: 16px 0 4px;
}

.stat {
    padding: 10px;
    background: #f5f7fa;
    border-radius: 8px;
}

.stat-label {
    font-size: 12px;
    color: #616e7c;
}

.stat-value {
    font-size: 18px;
    font-weight: 600;
}

.prediction-note {
    font-size: 12px;
    color: #7b8794;
    min-height: 16px;
}

.chart-wrapper {
    flex: 1;
    min-height: 320px;
    margin-top: 12px;
}

.chart-wrapper canvas {
    width: 100%;
    height: 100%;
    cursor: crosshair;
}
"#;
