use common::format::format_count;
use common::model::{DataSourceMode, PageSize, ToolbarColumn};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::{Msg, Toolbar};

pub fn view(toolbar: &Toolbar, ctx: &Context<Toolbar>) -> Html {
    html! {
        <div class="toolbar">
            <div class="toolbar-row">
                { search_box(ctx) }
                <div class="toolbar-actions">
                    { export_button(ctx) }
                    { clear_selection_button(ctx) }
                    { column_menu(toolbar, ctx) }
                    { reset_layout_button(ctx) }
                </div>
            </div>
            <div class="toolbar-row toolbar-footer">
                { page_size_select(ctx) }
                { source_toggle(ctx) }
            </div>
        </div>
    }
}

fn search_box(ctx: &Context<Toolbar>) -> Html {
    let props = ctx.props();
    let on_input = {
        let on_quick_filter = props.on_quick_filter.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_quick_filter.emit(input.value());
        })
    };
    let on_clear = {
        let on_quick_filter = props.on_quick_filter.clone();
        Callback::from(move |_: MouseEvent| on_quick_filter.emit(String::new()))
    };

    html! {
        <div class="search-box">
            <input
                type="search"
                placeholder="Search employees, departments, skills..."
                aria-label="Search employees"
                value={props.quick_filter.clone()}
                oninput={on_input}
            />
            if !props.quick_filter.is_empty() {
                <button class="search-clear" aria-label="Clear search" onclick={on_clear}>
                    { "×" }
                </button>
            }
        </div>
    }
}

fn export_button(ctx: &Context<Toolbar>) -> Html {
    let on_export = ctx.props().on_export.reform(|_: MouseEvent| ());
    html! {
        <button class="btn btn-primary" aria-label="Export to CSV" onclick={on_export}>
            { "Export" }
        </button>
    }
}

fn clear_selection_button(ctx: &Context<Toolbar>) -> Html {
    let props = ctx.props();
    if props.selected_rows == 0 {
        return Html::default();
    }
    let on_clear = props.on_clear_selection.reform(|_: MouseEvent| ());
    html! {
        <button class="btn btn-dark" aria-label="Clear selection" onclick={on_clear}>
            { "Clear" }
            <span class="badge">{ format_count(props.selected_rows) }</span>
        </button>
    }
}

fn column_menu(toolbar: &Toolbar, ctx: &Context<Toolbar>) -> Html {
    let props = ctx.props();
    let link = ctx.link();
    let visible = visible_count(&props.columns);

    html! {
        <div class="column-menu">
            <button
                class={classes!("btn", "btn-outline", toolbar.show_column_menu.then_some("open"))}
                aria-label="Column visibility"
                aria-expanded={toolbar.show_column_menu.to_string()}
                onclick={link.callback(|_| Msg::ToggleColumnMenu)}
            >
                { "Columns" }
                <span class="badge">{ visible }</span>
            </button>
            if toolbar.show_column_menu {
                <div class="menu-backdrop" onclick={link.callback(|_| Msg::CloseColumnMenu)}></div>
                <div class="menu-panel" role="dialog" aria-label="Column visibility">
                    <div class="menu-header">
                        <h3>{ "Column Visibility" }</h3>
                        <button
                            class="menu-close"
                            aria-label="Close"
                            onclick={link.callback(|_| Msg::CloseColumnMenu)}
                        >
                            { "×" }
                        </button>
                        <p>{ visibility_summary(&props.columns) }</p>
                    </div>
                    <div class="menu-columns">
                        {
                            for props.columns.iter().map(|column| {
                                column_toggle(column, &props.on_column_visibility)
                            })
                        }
                    </div>
                </div>
            }
        </div>
    }
}

fn column_toggle(column: &ToolbarColumn, on_change: &Callback<(String, bool)>) -> Html {
    let on_input = {
        let on_change = on_change.clone();
        let col_id = column.col_id.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((col_id.clone(), input.checked()));
        })
    };

    html! {
        <label key={column.col_id.clone()} class="menu-column">
            <input type="checkbox" checked={column.visible} onchange={on_input} />
            <span>{ column.header.clone() }</span>
        </label>
    }
}

fn reset_layout_button(ctx: &Context<Toolbar>) -> Html {
    let on_reset = ctx.props().on_reset_layout.reform(|_: MouseEvent| ());
    html! {
        <button
            class="btn btn-outline"
            title="Restore the default column order, widths and visibility"
            onclick={on_reset}
        >
            { "Reset layout" }
        </button>
    }
}

fn page_size_select(ctx: &Context<Toolbar>) -> Html {
    let props = ctx.props();
    let on_change = {
        let on_page_size = props.on_page_size.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(size) = parse_page_size(&select.value()) {
                on_page_size.emit(size);
            }
        })
    };

    html! {
        <div class="page-size">
            <label for="page-size">{ "Rows per page" }</label>
            <select id="page-size" onchange={on_change}>
                { for PageSize::ALL.iter().map(|size| html! {
                    <option value={size.rows().to_string()} selected={*size == props.page_size}>
                        { format!("{size} rows") }
                    </option>
                }) }
            </select>
        </div>
    }
}

fn source_toggle(ctx: &Context<Toolbar>) -> Html {
    let props = ctx.props();
    let on_toggle = props.on_toggle_source.reform(|_: MouseEvent| ());
    let rows = match props.mode {
        DataSourceMode::Sample => props.sample_rows,
        DataSourceMode::Synthetic => props.synthetic_rows,
    };

    html! {
        <button
            class={classes!("source-toggle", props.mode.is_synthetic().then_some("synthetic"))}
            title={format!("Switch to {}", props.mode.toggled().label())}
            disabled={props.loading}
            onclick={on_toggle}
        >
            <span class="source-label">{ props.mode.label() }</span>
            <span class="source-rows">{ rows_caption(props.mode, rows) }</span>
        </button>
    }
}

pub fn parse_page_size(value: &str) -> Option<PageSize> {
    let rows: u32 = value.trim().parse().ok()?;
    PageSize::try_from(rows).ok()
}

pub fn visible_count(columns: &[ToolbarColumn]) -> usize {
    columns.iter().filter(|column| column.visible).count()
}

/// `"12 of 15 columns visible"`
pub fn visibility_summary(columns: &[ToolbarColumn]) -> String {
    format!(
        "{} of {} columns visible",
        visible_count(columns),
        columns.len()
    )
}

fn rows_caption(mode: DataSourceMode, rows: usize) -> String {
    match mode {
        DataSourceMode::Synthetic => format!("{} rows loaded", format_count(rows)),
        DataSourceMode::Sample => format!("{} rows", format_count(rows)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(col_id: &str, visible: bool) -> ToolbarColumn {
        ToolbarColumn {
            col_id: col_id.to_string(),
            header: col_id.to_uppercase(),
            visible,
        }
    }

    #[test]
    fn page_size_accepts_only_offered_sizes() {
        assert_eq!(parse_page_size("50"), Some(PageSize::Fifty));
        assert_eq!(parse_page_size(" 10 "), Some(PageSize::Ten));
        assert_eq!(parse_page_size("25"), None);
        assert_eq!(parse_page_size("lots"), None);
    }

    #[test]
    fn summary_counts_visible_columns() {
        let columns = vec![column("email", true), column("age", false), column("salary", true)];
        assert_eq!(visible_count(&columns), 2);
        assert_eq!(visibility_summary(&columns), "2 of 3 columns visible");
        assert_eq!(visibility_summary(&[]), "0 of 0 columns visible");
    }

    #[test]
    fn synthetic_caption_reads_as_loaded() {
        assert_eq!(
            rows_caption(DataSourceMode::Synthetic, 100_000),
            "100,000 rows loaded"
        );
        assert_eq!(rows_caption(DataSourceMode::Sample, 20), "20 rows");
    }
}
