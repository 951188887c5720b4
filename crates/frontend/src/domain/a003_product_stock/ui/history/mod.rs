use crate::shared::api_utils::fetch_json;
use crate::shared::format::format_quantity;
use contracts::domain::a003_product_stock::movement::StockMovement;
use contracts::domain::a003_product_stock::product::Product;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Remote-fetch sub-states of the history table.
#[derive(Clone, PartialEq)]
enum HistoryState {
    Loading,
    Loaded(Vec<StockMovement>),
    Error(String),
}

async fn fetch_history(product_id: i64) -> Result<Vec<StockMovement>, String> {
    fetch_json(&format!("/estoque/api/historico/{product_id}")).await
}

/// Movement history modal. The only screen state the server does not embed;
/// fetched on open, with explicit loading/empty/error renderings.
#[component]
#[allow(non_snake_case)]
pub fn StockHistory(product: Product, on_close: Callback<()>) -> impl IntoView {
    let state = RwSignal::new(HistoryState::Loading);
    let product_id = product.id;

    spawn_local(async move {
        match fetch_history(product_id).await {
            Ok(rows) => state.set(HistoryState::Loaded(rows)),
            Err(e) => {
                log::warn!("stock history fetch failed for product {product_id}: {e}");
                state.set(HistoryState::Error(e));
            }
        }
    });

    view! {
        <div class="details">
            <div class="details__header">
                <h2 class="details__title">{format!("Histórico — {}", product.nome)}</h2>
                <button class="button button--ghost" on:click=move |_| on_close.run(())>
                    {"Fechar"}
                </button>
            </div>

            {move || match state.get() {
                HistoryState::Loading => {
                    view! { <div class="empty-state">{"Carregando movimentações..."}</div> }
                        .into_any()
                }
                HistoryState::Error(e) => {
                    view! {
                        <div class="warning-box warning-box--error">
                            <span class="warning-box__text">
                                {format!("Falha ao carregar o histórico: {e}")}
                            </span>
                        </div>
                    }
                        .into_any()
                }
                HistoryState::Loaded(rows) if rows.is_empty() => {
                    view! { <div class="empty-state">{"Nenhuma movimentação registrada."}</div> }
                        .into_any()
                }
                HistoryState::Loaded(rows) => {
                    view! {
                        <div class="table">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">{"Data"}</th>
                                        <th class="table__header-cell">{"Origem"}</th>
                                        <th class="table__header-cell">{"Quantidade"}</th>
                                        <th class="table__header-cell">{"Saldo"}</th>
                                        <th class="table__header-cell">{"Usuário"}</th>
                                        <th class="table__header-cell">{"Observação"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {rows
                                        .into_iter()
                                        .map(|m| {
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell">{m.data.clone()}</td>
                                                    <td class="table__cell">
                                                        {m.origem.display_name()}
                                                    </td>
                                                    <td class="table__cell">
                                                        {format!(
                                                            "{}{}",
                                                            m.tipo.sign(),
                                                            format_quantity(m.quantidade),
                                                        )}
                                                    </td>
                                                    <td class="table__cell">
                                                        {format_quantity(m.saldo_novo)}
                                                    </td>
                                                    <td class="table__cell">{m.usuario.clone()}</td>
                                                    <td class="table__cell">{m.observacao.clone()}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
