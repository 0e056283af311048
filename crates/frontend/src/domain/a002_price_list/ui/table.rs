use contracts::domain::a002_price_list::{PriceCell, PriceRow, PriceTable, PRICE_COLUMNS};
use leptos::prelude::*;

/// Таблица цен раздела. Перекрытые ячейки (`row_span`/`col_span` равны 0)
/// не выводятся, остальные получают `rowspan`/`colspan` как есть.
#[component]
pub fn PriceTableView(table: PriceTable) -> impl IntoView {
    view! {
        <div class="price-table__wrapper">
            <table class="price-table">
                <thead>
                    <tr>
                        {PRICE_COLUMNS
                            .iter()
                            .map(|caption| view! { <th>{*caption}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {table.rows.into_iter().map(price_row).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

fn price_row(row: PriceRow) -> impl IntoView {
    let row_class = if row.is_header() {
        "price-table__subsection"
    } else {
        "price-table__row"
    };

    view! {
        <tr class=row_class>
            {row
                .cells()
                .into_iter()
                .filter(PriceCell::is_rendered)
                .map(|cell| view! {
                    <td rowspan=cell.row_span colspan=cell.col_span>
                        {cell.text}
                    </td>
                })
                .collect_view()}
        </tr>
    }
}
