use crate::shared::api_utils::navigate_to;
use crate::shared::masks::mask_cnpj;
use chrono::Datelike;
use contracts::domain::a005_expense::fields::{Categoria, FormaPagamento};
use contracts::domain::a005_expense::filter::FinanceFilter;
use leptos::prelude::*;

fn current_period() -> (u32, i32) {
    let now = chrono::Local::now();
    (now.month(), now.year())
}

/// Finance page: expense entry form and the period filter panel.
#[component]
#[allow(non_snake_case)]
pub fn FinancePage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Financeiro"}</h1>
                </div>
            </div>

            <FilterPanel />
            <ExpenseForm />
        </div>
    }
}

/// Filter criteria become a `GET /financeiro/?mes&ano&...` navigation; the
/// server renders the filtered page. Empty criteria stay out of the URL.
#[component]
fn FilterPanel() -> impl IntoView {
    let (default_mes, default_ano) = current_period();

    let mes = RwSignal::new(default_mes.to_string());
    let ano = RwSignal::new(default_ano.to_string());
    let categoria = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let fornecedor = RwSignal::new(String::new());
    let forma_pagamento = RwSignal::new(String::new());
    let tipo_custo = RwSignal::new(String::new());
    let vencimento = RwSignal::new(String::new());

    let some_if_set = |s: String| if s.is_empty() { None } else { Some(s) };

    let apply = move |_| {
        let filter = FinanceFilter {
            mes: mes.get().trim().parse().unwrap_or(default_mes).clamp(1, 12),
            ano: ano.get().trim().parse().unwrap_or(default_ano),
            categoria: some_if_set(categoria.get()),
            status: some_if_set(status.get()),
            fornecedor: some_if_set(fornecedor.get()),
            forma_pagamento: some_if_set(forma_pagamento.get()),
            tipo_custo: some_if_set(tipo_custo.get()),
            vencimento: some_if_set(vencimento.get()),
        };
        match serde_qs::to_string(&filter) {
            Ok(qs) => navigate_to(&format!("/financeiro/?{qs}")),
            Err(e) => log::error!("finance filter serialization failed: {e}"),
        }
    };

    view! {
        <div class="panel">
            <h2 class="panel__title">{"Filtros"}</h2>
            <div class="filter-bar">
                <input
                    class="form__input"
                    type="number"
                    min="1"
                    max="12"
                    placeholder="Mês"
                    prop:value=move || mes.get()
                    on:input=move |ev| mes.set(event_target_value(&ev))
                />
                <input
                    class="form__input"
                    type="number"
                    placeholder="Ano"
                    prop:value=move || ano.get()
                    on:input=move |ev| ano.set(event_target_value(&ev))
                />
                <select
                    class="form__input"
                    on:change=move |ev| categoria.set(event_target_value(&ev))
                >
                    <option value="">{"Todas as categorias"}</option>
                    {Categoria::all()
                        .into_iter()
                        .map(|c| view! { <option value=c.code()>{c.display_name()}</option> })
                        .collect_view()}
                </select>
                <select
                    class="form__input"
                    on:change=move |ev| status.set(event_target_value(&ev))
                >
                    <option value="">{"Todos os status"}</option>
                    <option value="pago">{"Pago"}</option>
                    <option value="pendente">{"Pendente"}</option>
                </select>
                <input
                    class="form__input"
                    placeholder="Fornecedor"
                    prop:value=move || fornecedor.get()
                    on:input=move |ev| fornecedor.set(event_target_value(&ev))
                />
                <select
                    class="form__input"
                    on:change=move |ev| forma_pagamento.set(event_target_value(&ev))
                >
                    <option value="">{"Todas as formas"}</option>
                    {FormaPagamento::all()
                        .into_iter()
                        .map(|f| view! { <option value=f.code()>{f.display_name()}</option> })
                        .collect_view()}
                </select>
                <select
                    class="form__input"
                    on:change=move |ev| tipo_custo.set(event_target_value(&ev))
                >
                    <option value="">{"Fixo e variável"}</option>
                    <option value="fixo">{"Custo fixo"}</option>
                    <option value="variavel">{"Custo variável"}</option>
                </select>
                <input
                    class="form__input"
                    type="date"
                    prop:value=move || vencimento.get()
                    on:input=move |ev| vencimento.set(event_target_value(&ev))
                />
                <button class="button button--primary" on:click=apply>{"Filtrar"}</button>
            </div>
        </div>
    }
}

/// Expense form with the conditional field groups: barcode for boleto/PIX,
/// employee for personnel, supplier (+CNPJ) for purchased categories.
#[component]
fn ExpenseForm() -> impl IntoView {
    let descricao = RwSignal::new(String::new());
    let valor = RwSignal::new(String::new());
    let vencimento = RwSignal::new(String::new());
    let categoria = RwSignal::new(Categoria::Outros);
    let forma = RwSignal::new(FormaPagamento::Dinheiro);
    let codigo_barras = RwSignal::new(String::new());
    let funcionario = RwSignal::new(String::new());
    let fornecedor = RwSignal::new(String::new());
    let fornecedor_cnpj = RwSignal::new(String::new());
    let recorrente = RwSignal::new(false);
    let repeticoes = RwSignal::new("2".to_string());

    view! {
        <div class="panel">
            <h2 class="panel__title">{"Nova despesa"}</h2>
            <form class="form" method="post" action="/financeiro/nova">
                <div class="form__group">
                    <label class="form__label">{"Descrição *"}</label>
                    <input
                        class="form__input"
                        name="descricao"
                        required
                        prop:value=move || descricao.get()
                        on:input=move |ev| descricao.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label">{"Valor (R$) *"}</label>
                        <input
                            class="form__input"
                            name="valor"
                            type="number"
                            step="0.01"
                            min="0.01"
                            required
                            prop:value=move || valor.get()
                            on:input=move |ev| valor.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">{"Vencimento *"}</label>
                        <input
                            class="form__input"
                            name="vencimento"
                            type="date"
                            required
                            prop:value=move || vencimento.get()
                            on:input=move |ev| vencimento.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label">{"Categoria"}</label>
                        <select
                            class="form__input"
                            name="categoria"
                            on:change=move |ev| {
                                if let Some(c) = Categoria::from_code(&event_target_value(&ev)) {
                                    categoria.set(c);
                                }
                            }
                        >
                            {Categoria::all()
                                .into_iter()
                                .map(|c| {
                                    view! {
                                        <option
                                            value=c.code()
                                            selected=move || categoria.get() == c
                                        >
                                            {c.display_name()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form__group">
                        <label class="form__label">{"Forma de pagamento"}</label>
                        <select
                            class="form__input"
                            name="forma_pagamento"
                            on:change=move |ev| {
                                if let Some(f) = FormaPagamento::from_code(
                                    &event_target_value(&ev),
                                ) {
                                    forma.set(f);
                                }
                            }
                        >
                            {FormaPagamento::all()
                                .into_iter()
                                .map(|f| {
                                    view! {
                                        <option value=f.code() selected=move || forma.get() == f>
                                            {f.display_name()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                </div>

                <Show when=move || forma.get().needs_barcode()>
                    <div class="form__group">
                        <label class="form__label">{"Código de barras / copia e cola"}</label>
                        <input
                            class="form__input"
                            name="codigo_barras"
                            prop:value=move || codigo_barras.get()
                            on:input=move |ev| codigo_barras.set(event_target_value(&ev))
                        />
                    </div>
                </Show>

                <Show when=move || categoria.get().needs_employee()>
                    <div class="form__group">
                        <label class="form__label">{"Funcionário"}</label>
                        <input
                            class="form__input"
                            name="funcionario"
                            prop:value=move || funcionario.get()
                            on:input=move |ev| funcionario.set(event_target_value(&ev))
                        />
                    </div>
                </Show>

                <Show when=move || categoria.get().needs_supplier()>
                    <div class="form__row">
                        <div class="form__group">
                            <label class="form__label">{"Fornecedor"}</label>
                            <input
                                class="form__input"
                                name="fornecedor"
                                prop:value=move || fornecedor.get()
                                on:input=move |ev| fornecedor.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <label class="form__label">{"CNPJ do fornecedor"}</label>
                            <input
                                class="form__input"
                                name="fornecedor_cnpj"
                                placeholder="00.000.000/0000-00"
                                prop:value=move || fornecedor_cnpj.get()
                                on:input=move |ev| {
                                    fornecedor_cnpj.set(mask_cnpj(&event_target_value(&ev)));
                                }
                            />
                        </div>
                    </div>
                </Show>

                <div class="form__group">
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            name="recorrente"
                            prop:checked=move || recorrente.get()
                            on:change=move |ev| recorrente.set(event_target_checked(&ev))
                        />
                        {"Despesa recorrente"}
                    </label>
                </div>
                <Show when=move || recorrente.get()>
                    <div class="form__group">
                        <label class="form__label">{"Repetições (meses)"}</label>
                        <input
                            class="form__input"
                            name="repeticoes"
                            type="number"
                            min="2"
                            max="36"
                            prop:value=move || repeticoes.get()
                            on:input=move |ev| repeticoes.set(event_target_value(&ev))
                        />
                    </div>
                </Show>

                <button class="button button--primary" type="submit">{"Lançar despesa"}</button>
            </form>
        </div>
    }
}
