use crate::shared::api_utils::fetch_json;
use contracts::domain::a004_sales_goal::UserSalesResponse;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq)]
enum SalesState {
    Loading,
    Loaded(UserSalesResponse),
    Error(String),
}

async fn fetch_user_sales(user_id: i64, mes: u32, ano: i32) -> Result<UserSalesResponse, String> {
    fetch_json(&format!(
        "/metas/api/vendas-usuario/{user_id}?mes={mes}&ano={ano}"
    ))
    .await
}

/// Sales of one seller in the goal period, fetched when the modal opens.
#[component]
#[allow(non_snake_case)]
pub fn UserSalesModal(
    user_id: i64,
    nome: String,
    mes: u32,
    ano: i32,
    on_close: Callback<()>,
) -> impl IntoView {
    let state = RwSignal::new(SalesState::Loading);

    spawn_local(async move {
        match fetch_user_sales(user_id, mes, ano).await {
            Ok(resp) => state.set(SalesState::Loaded(resp)),
            Err(e) => {
                log::warn!("user sales fetch failed for user {user_id}: {e}");
                state.set(SalesState::Error(e));
            }
        }
    });

    view! {
        <div class="details">
            <div class="details__header">
                <h2 class="details__title">{format!("Vendas — {nome} ({mes:02}/{ano})")}</h2>
                <button class="button button--ghost" on:click=move |_| on_close.run(())>
                    {"Fechar"}
                </button>
            </div>

            {move || match state.get() {
                SalesState::Loading => {
                    view! { <div class="empty-state">{"Carregando vendas..."}</div> }.into_any()
                }
                SalesState::Error(e) => {
                    view! {
                        <div class="warning-box warning-box--error">
                            <span class="warning-box__text">
                                {format!("Falha ao carregar as vendas: {e}")}
                            </span>
                        </div>
                    }
                        .into_any()
                }
                SalesState::Loaded(resp) if resp.vendas.is_empty() => {
                    view! { <div class="empty-state">{"Nenhuma venda no período."}</div> }
                        .into_any()
                }
                SalesState::Loaded(resp) => {
                    view! {
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">{"#"}</th>
                                    <th class="table__header-cell">{"Data"}</th>
                                    <th class="table__header-cell">{"Cliente"}</th>
                                    <th class="table__header-cell">{"Valor (R$)"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {resp
                                    .vendas
                                    .into_iter()
                                    .map(|v| {
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{format!("#{}", v.id)}</td>
                                                <td class="table__cell">{v.data.clone()}</td>
                                                <td class="table__cell">{v.cliente.clone()}</td>
                                                <td class="table__cell">{v.valor.clone()}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
