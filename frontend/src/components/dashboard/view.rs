use chrono::{DateTime, Local, Utc};
use common::format::format_count;
use yew::prelude::*;

use super::messages::Msg;
use super::state::DashboardComponent;
use crate::components::data_grid::DataGridComponent;
use crate::components::helpers::skeleton;
use crate::components::layout::CardGrid;

pub fn view(component: &DashboardComponent, ctx: &Context<DashboardComponent>) -> Html {
    let loading = component.is_loading();
    let switcher = &component.switcher;

    html! {
        <div class="dashboard">
            { header(component, loading) }
            { stats_cards(component, loading) }

            <section class="grid-section">
                <div class="grid-section-heading">
                    <h2>{ "Employee Directory" }</h2>
                    <p>{ "Manage and analyze your workforce data in real-time" }</p>
                </div>
                <DataGridComponent
                    rows={switcher.rows().clone()}
                    mode={switcher.mode()}
                    loading={loading}
                    config={component.config.clone()}
                    sample_rows={switcher.rows_for(common::model::DataSourceMode::Sample)}
                    synthetic_rows={component.config.synthetic_rows}
                    on_source_change={ctx.link().callback(Msg::RequestSource)}
                />
            </section>
        </div>
    }
}

fn header(component: &DashboardComponent, loading: bool) -> Html {
    let status = if loading {
        "Updating...".to_string()
    } else {
        format!("Live · {}", live_timestamp(component.switcher.last_updated()))
    };

    html! {
        <header class="dashboard-header">
            <div class="dashboard-title">
                <h1>{ "FactWise Dashboard" }</h1>
                <p>{ "Workforce Analytics & Management" }</p>
            </div>
            <div class="live-indicator">
                <span class={classes!("live-dot", loading.then_some("updating"))}></span>
                <span>{ status }</span>
            </div>
        </header>
    }
}

/// Local wall-clock time of the last swap, e.g. `Mar 4, 2025, 09:12:44 AM`.
fn live_timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local)
        .format("%b %-d, %Y, %I:%M:%S %p")
        .to_string()
}

fn stats_cards(component: &DashboardComponent, loading: bool) -> Html {
    if loading {
        return html! {
            <CardGrid columns={3}>
                { skeleton("stat-card") }
                { skeleton("stat-card") }
                { skeleton("stat-card") }
            </CardGrid>
        };
    }

    let stats = component.stats;
    html! {
        <CardGrid columns={3}>
            { stat_card("TOTAL", format_count(stats.total), "Total Employees".to_string()) }
            {
                stat_card(
                    "ACTIVE",
                    format_count(stats.active),
                    format!("{:.1}% Active Rate", stats.active_rate()),
                )
            }
            {
                stat_card(
                    "DEPARTMENTS",
                    format_count(stats.departments),
                    format!("~{:.0} employees each", stats.average_per_department()),
                )
            }
        </CardGrid>
    }
}

fn stat_card(tag: &'static str, value: String, caption: String) -> Html {
    html! {
        <div class="stat-card">
            <span class="stat-tag">{ tag }</span>
            <div class="stat-value">{ value }</div>
            <div class="stat-caption">{ caption }</div>
        </div>
    }
}
