//! Sales Wizard - View
//!
//! Six linear steps over a single accumulated draft. Navigation only moves
//! forward through validation; backward is always allowed and lossless.

use super::view_model::QuoteWizardVm;
use crate::shared::format::format_brl;
use contracts::domain::a001_quote::draft::{ClientType, DiscountMode, MeasurementUnit};
use contracts::domain::a001_quote::pricing::UnitLock;
use contracts::domain::a001_quote::validate::WizardStep;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn parse_f64(raw: &str) -> f64 {
    raw.replace(',', ".").trim().parse().unwrap_or(0.0)
}

#[component]
pub fn QuoteWizard() -> impl IntoView {
    let vm = QuoteWizardVm::new();
    vm.load_colors();

    // Enter must not submit the form mid-wizard; textareas keep their
    // newline behavior.
    let block_enter = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            let is_textarea = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
                .map(|el| el.tag_name() == "TEXTAREA")
                .unwrap_or(false);
            if !is_textarea {
                ev.prevent_default();
            }
        }
    };

    view! {
        <div class="page wizard" on:keydown=block_enter>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Nova Venda"}</h1>
                </div>
            </div>

            <StepIndicator vm=vm />

            {move || {
                vm.errors
                    .get()
                    .map(|e| {
                        view! {
                            <div class="warning-box warning-box--error">
                                <span class="warning-box__icon">"⚠"</span>
                                <span class="warning-box__text">{e.message.clone()}</span>
                            </div>
                        }
                    })
            }}

            <div class="wizard__body">
                {move || match vm.step.get() {
                    WizardStep::Cliente => view! { <StepCliente vm=vm /> }.into_any(),
                    WizardStep::Servico => view! { <StepServico vm=vm /> }.into_any(),
                    WizardStep::Medidas => view! { <StepMedidas vm=vm /> }.into_any(),
                    WizardStep::Quantidade => view! { <StepQuantidade vm=vm /> }.into_any(),
                    WizardStep::Financeiro => view! { <StepFinanceiro vm=vm /> }.into_any(),
                    WizardStep::Revisao => view! { <StepRevisao vm=vm /> }.into_any(),
                }}
            </div>

            <Show when=move || {
                matches!(
                    vm.step.get(),
                    WizardStep::Medidas | WizardStep::Quantidade | WizardStep::Financeiro
                )
            }>
                <PricePanel vm=vm />
            </Show>

            <WizardFooter vm=vm />
        </div>
    }
}

#[component]
fn StepIndicator(vm: QuoteWizardVm) -> impl IntoView {
    view! {
        <div class="wizard__steps">
            {WizardStep::all()
                .into_iter()
                .map(|s| {
                    let class = move || {
                        let current = vm.step.get().number();
                        if s.number() < current {
                            "wizard__step wizard__step--completed"
                        } else if s.number() == current {
                            "wizard__step wizard__step--active"
                        } else {
                            "wizard__step"
                        }
                    };
                    view! {
                        <div class=class>
                            <span class="wizard__step-number">{s.number()}</span>
                            <span class="wizard__step-title">{s.title()}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn StepCliente(vm: QuoteWizardVm) -> impl IntoView {
    let is_pf = move || vm.draft.get().tipo_cliente == ClientType::Pf;

    view! {
        <div class="form">
            <div class="form__group">
                <label class="form__label">{"Tipo de cliente"}</label>
                <div class="form__radio-row">
                    <label class="form__radio">
                        <input
                            type="radio"
                            name="tipo_cliente"
                            prop:checked=is_pf
                            on:change=move |_| {
                                vm.draft.update(|d| d.tipo_cliente = ClientType::Pf)
                            }
                        />
                        {"Pessoa Física"}
                    </label>
                    <label class="form__radio">
                        <input
                            type="radio"
                            name="tipo_cliente"
                            prop:checked=move || !is_pf()
                            on:change=move |_| {
                                vm.draft.update(|d| d.tipo_cliente = ClientType::Pj)
                            }
                        />
                        {"Pessoa Jurídica"}
                    </label>
                </div>
            </div>

            <Show when=is_pf>
                <div class="form__group">
                    <label class="form__label">{"Nome completo *"}</label>
                    <input
                        class="form__input"
                        class:form__input--invalid=move || vm.field_invalid("pf_nome")
                        prop:value=move || vm.draft.get().pf_nome
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            vm.draft.update(|d| d.pf_nome = v);
                        }
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">{"CPF"}</label>
                    <input
                        class="form__input"
                        class:form__input--invalid=move || vm.field_invalid("pf_cpf")
                        placeholder="000.000.000-00"
                        prop:value=move || vm.draft.get().pf_cpf
                        on:input=move |ev| vm.set_cpf(&event_target_value(&ev))
                    />
                </div>
            </Show>

            <Show when=move || !is_pf()>
                <div class="form__group">
                    <label class="form__label">{"Nome fantasia *"}</label>
                    <input
                        class="form__input"
                        class:form__input--invalid=move || vm.field_invalid("pj_fantasia")
                        prop:value=move || vm.draft.get().pj_fantasia
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            vm.draft.update(|d| d.pj_fantasia = v);
                        }
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">{"Solicitante *"}</label>
                    <input
                        class="form__input"
                        class:form__input--invalid=move || vm.field_invalid("pj_solicitante")
                        prop:value=move || vm.draft.get().pj_solicitante
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            vm.draft.update(|d| d.pj_solicitante = v);
                        }
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">{"CNPJ"}</label>
                    <input
                        class="form__input"
                        class:form__input--invalid=move || vm.field_invalid("pj_cnpj")
                        placeholder="00.000.000/0000-00"
                        prop:value=move || vm.draft.get().pj_cnpj
                        on:input=move |ev| vm.set_cnpj(&event_target_value(&ev))
                    />
                </div>
            </Show>

            <div class="form__group">
                <label class="form__label">{"Telefone *"}</label>
                <input
                    class="form__input"
                    class:form__input--invalid=move || vm.field_invalid("telefone")
                    placeholder="(00) 00000-0000"
                    prop:value=move || vm.draft.get().telefone
                    on:input=move |ev| vm.set_phone(&event_target_value(&ev))
                />
            </div>
            <div class="form__group">
                <label class="form__label">{"E-mail"}</label>
                <input
                    class="form__input"
                    type="email"
                    prop:value=move || vm.draft.get().email
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        vm.draft.update(|d| d.email = v);
                    }
                />
            </div>
            <div class="form__group">
                <label class="form__label">{"Endereço"}</label>
                <input
                    class="form__input"
                    prop:value=move || vm.draft.get().endereco
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        vm.draft.update(|d| d.endereco = v);
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn StepServico(vm: QuoteWizardVm) -> impl IntoView {
    view! {
        <div class="form">
            <div class="form__group">
                <label class="form__label">{"Descrição do serviço *"}</label>
                <textarea
                    class="form__input form__input--area"
                    class:form__input--invalid=move || vm.field_invalid("descricao_servico")
                    prop:value=move || vm.draft.get().descricao_servico
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        vm.draft.update(|d| d.descricao_servico = v);
                    }
                ></textarea>
            </div>
            <div class="form__group">
                <label class="form__label">{"Observações internas"}</label>
                <textarea
                    class="form__input form__input--area"
                    prop:value=move || vm.draft.get().observacoes_internas
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        vm.draft.update(|d| d.observacoes_internas = v);
                    }
                ></textarea>
            </div>
        </div>
    }
}

#[component]
fn StepMedidas(vm: QuoteWizardVm) -> impl IntoView {
    let is_m3 = move || vm.draft.get().tipo_medida == MeasurementUnit::M3;

    view! {
        <div class="form">
            {move || {
                vm.colors_error
                    .get()
                    .map(|e| {
                        view! {
                            <div class="warning-box warning-box--error">
                                <span class="warning-box__text">
                                    {format!("Falha ao carregar cores: {e}")}
                                </span>
                            </div>
                        }
                    })
            }}

            <div class="form__group">
                <label class="form__label">{"Cor *"}</label>
                <select
                    class="form__input"
                    class:form__input--invalid=move || vm.field_invalid("cor_id")
                    on:change=move |ev| {
                        let v = event_target_value(&ev);
                        vm.select_color(v.parse::<i64>().ok());
                    }
                >
                    <option value="" selected=move || vm.draft.get().cor_id.is_none()>
                        {"Selecione a cor"}
                    </option>
                    {move || {
                        let selected = vm.draft.get().cor_id;
                        vm.colors
                            .get()
                            .into_iter()
                            .map(|c| {
                                view! {
                                    <option
                                        value=c.id.to_string()
                                        selected={selected == Some(c.id)}
                                    >
                                        {c.nome.clone()}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            {move || {
                matches!(vm.lock(), Some(UnitLock::NoPrice))
                    .then(|| {
                        view! {
                            <div class="warning-box warning-box--error">
                                <span class="warning-box__text">
                                    {"Esta cor não possui preço cadastrado. Escolha outra cor."}
                                </span>
                            </div>
                        }
                    })
            }}

            <div class="form__group">
                <label class="form__label">{"Tipo de medida"}</label>
                <select
                    class="form__input"
                    prop:disabled=move || vm.unit_selector_disabled()
                    on:change=move |ev| {
                        let unit = if event_target_value(&ev) == "m3" {
                            MeasurementUnit::M3
                        } else {
                            MeasurementUnit::M2
                        };
                        vm.set_unit(unit);
                    }
                >
                    <option value="m2" selected=move || !is_m3()>{"m² (área)"}</option>
                    <option value="m3" selected=is_m3>{"m³ (volume)"}</option>
                </select>
            </div>

            <div class="form__row">
                <div class="form__group">
                    <label class="form__label">{"Largura (m) *"}</label>
                    <input
                        class="form__input"
                        type="number"
                        step="0.01"
                        min="0"
                        class:form__input--invalid=move || vm.field_invalid("dim_1")
                        prop:value=move || vm.draft.get().dim_1.to_string()
                        on:input=move |ev| {
                            let v = parse_f64(&event_target_value(&ev));
                            vm.draft.update(|d| d.dim_1 = v);
                        }
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">{"Altura (m) *"}</label>
                    <input
                        class="form__input"
                        type="number"
                        step="0.01"
                        min="0"
                        class:form__input--invalid=move || vm.field_invalid("dim_2")
                        prop:value=move || vm.draft.get().dim_2.to_string()
                        on:input=move |ev| {
                            let v = parse_f64(&event_target_value(&ev));
                            vm.draft.update(|d| d.dim_2 = v);
                        }
                    />
                </div>
                <Show when=is_m3>
                    <div class="form__group">
                        <label class="form__label">{"Profundidade (m) *"}</label>
                        <input
                            class="form__input"
                            type="number"
                            step="0.01"
                            min="0"
                            class:form__input--invalid=move || vm.field_invalid("dim_3")
                            prop:value=move || vm.draft.get().dim_3.to_string()
                            on:input=move |ev| {
                                let v = parse_f64(&event_target_value(&ev));
                                vm.draft.update(|d| d.dim_3 = v);
                            }
                        />
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn StepQuantidade(vm: QuoteWizardVm) -> impl IntoView {
    view! {
        <div class="form">
            <div class="form__group">
                <label class="form__label">{"Quantidade de peças *"}</label>
                <input
                    class="form__input"
                    type="number"
                    min="1"
                    step="1"
                    class:form__input--invalid=move || vm.field_invalid("qtd_pecas")
                    prop:value=move || vm.draft.get().qtd_pecas.to_string()
                    on:input=move |ev| {
                        let v = event_target_value(&ev).trim().parse().unwrap_or(0);
                        vm.draft.update(|d| d.qtd_pecas = v);
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn StepFinanceiro(vm: QuoteWizardVm) -> impl IntoView {
    let is_percent = move || vm.draft.get().tipo_desconto == DiscountMode::Percent;

    view! {
        <div class="form">
            <div class="form__group">
                <label class="form__label">{"Acréscimo (R$)"}</label>
                <input
                    class="form__input"
                    type="number"
                    step="0.01"
                    min="0"
                    class:form__input--invalid=move || vm.field_invalid("input_acrescimo")
                    prop:value=move || vm.draft.get().input_acrescimo.to_string()
                    on:input=move |ev| {
                        let v = parse_f64(&event_target_value(&ev));
                        vm.draft.update(|d| d.input_acrescimo = v);
                    }
                />
            </div>
            <div class="form__row">
                <div class="form__group">
                    <label class="form__label">{"Tipo de desconto"}</label>
                    <select
                        class="form__input"
                        on:change=move |ev| {
                            let mode = if event_target_value(&ev) == "perc" {
                                DiscountMode::Percent
                            } else {
                                DiscountMode::Amount
                            };
                            vm.draft.update(|d| d.tipo_desconto = mode);
                        }
                    >
                        <option value="real" selected=move || !is_percent()>
                            {"Valor (R$)"}
                        </option>
                        <option value="perc" selected=is_percent>{"Percentual (%)"}</option>
                    </select>
                </div>
                <div class="form__group">
                    <label class="form__label">
                        {move || if is_percent() { "Desconto (%)" } else { "Desconto (R$)" }}
                    </label>
                    <input
                        class="form__input"
                        type="number"
                        step="0.01"
                        min="0"
                        class:form__input--invalid=move || vm.field_invalid("input_desconto")
                        prop:value=move || vm.draft.get().input_desconto.to_string()
                        on:input=move |ev| {
                            let v = parse_f64(&event_target_value(&ev));
                            vm.draft.update(|d| d.input_desconto = v);
                        }
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
fn StepRevisao(vm: QuoteWizardVm) -> impl IntoView {
    let review_row = |label: &'static str, value: String| {
        view! {
            <div class="review__row">
                <span class="review__label">{label}</span>
                <span class="review__value">{value}</span>
            </div>
        }
    };

    view! {
        <div class="review">
            {move || {
                let d = vm.draft.get();
                let pricing = vm.pricing();
                let color = vm
                    .selected_color()
                    .map(|c| c.nome)
                    .unwrap_or_else(|| "-".to_string());
                let dims = match d.tipo_medida {
                    MeasurementUnit::M2 => format!("{} × {} m", d.dim_1, d.dim_2),
                    MeasurementUnit::M3 => format!("{} × {} × {} m", d.dim_1, d.dim_2, d.dim_3),
                };
                view! {
                    <div class="review__section">
                        <h3 class="review__heading">{"Cliente"}</h3>
                        {review_row("Nome", d.client_name().to_string())}
                        {review_row("Documento", {
                            let doc = d.document();
                            if doc.is_empty() { "-".to_string() } else { doc.to_string() }
                        })}
                        {review_row("Telefone", d.telefone.clone())}
                    </div>
                    <div class="review__section">
                        <h3 class="review__heading">{"Serviço"}</h3>
                        {review_row("Descrição", d.descricao_servico.clone())}
                        {review_row("Cor", color)}
                        {review_row("Medidas", dims)}
                        {review_row("Quantidade", d.qtd_pecas.to_string())}
                    </div>
                    <div class="review__section">
                        <h3 class="review__heading">{"Valores"}</h3>
                        {review_row("Base", format_brl(pricing.base_value))}
                        {review_row("Acréscimo", format_brl(pricing.surcharge))}
                        {review_row("Desconto", format_brl(pricing.discount_applied))}
                        {review_row("Total", format_brl(pricing.final_value))}
                    </div>
                }
            }}
            <HighDiscountBanner vm=vm />
            {move || {
                vm.submit_error
                    .get()
                    .map(|e| {
                        view! {
                            <div class="warning-box warning-box--error">
                                <span class="warning-box__text">
                                    {format!("Falha ao registrar a venda: {e}")}
                                </span>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn PricePanel(vm: QuoteWizardVm) -> impl IntoView {
    view! {
        <div class="price-panel">
            {move || {
                let p = vm.pricing();
                let unit = vm.draft.get().tipo_medida;
                view! {
                    <div class="price-panel__line">
                        <span>{format!("Medida ({})", unit.symbol())}</span>
                        <span>{format!("{:.3}", p.measure)}</span>
                    </div>
                    <div class="price-panel__line">
                        <span>{"Valor base"}</span>
                        <span>{format_brl(p.base_value)}</span>
                    </div>
                    <div class="price-panel__line">
                        <span>{"Acréscimo"}</span>
                        <span>{format_brl(p.surcharge)}</span>
                    </div>
                    <div class="price-panel__line">
                        <span>{"Desconto"}</span>
                        <span>{format_brl(p.discount_applied)}</span>
                    </div>
                    <div class="price-panel__line price-panel__line--total">
                        <span>{"Total"}</span>
                        <span>{format_brl(p.final_value)}</span>
                    </div>
                }
            }}
            <HighDiscountBanner vm=vm />
        </div>
    }
}

/// Non-blocking warning shown while the discount exceeds 15% of the subtotal.
#[component]
fn HighDiscountBanner(vm: QuoteWizardVm) -> impl IntoView {
    view! {
        <Show when=move || vm.pricing().high_discount>
            <div class="warning-box warning-box--attention">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">
                    {"Desconto acima de 15% do subtotal. Confirme com o gerente."}
                </span>
            </div>
        </Show>
    }
}

#[component]
fn WizardFooter(vm: QuoteWizardVm) -> impl IntoView {
    let is_first = move || vm.step.get() == WizardStep::FIRST;
    let is_last = move || vm.step.get() == WizardStep::LAST;

    view! {
        <div class="wizard__footer">
            <button
                class="button button--secondary"
                prop:disabled=is_first
                on:click=move |_| vm.retreat()
            >
                {"Voltar"}
            </button>
            <Show
                when=is_last
                fallback=move || {
                    view! {
                        <button class="button button--primary" on:click=move |_| vm.advance()>
                            {"Próximo"}
                        </button>
                    }
                }
            >
                <button
                    class="button button--primary"
                    prop:disabled=move || vm.submitting.get()
                    on:click=move |_| vm.submit()
                >
                    {move || {
                        if vm.submitting.get() { "Enviando..." } else { "Finalizar Venda" }
                    }}
                </button>
            </Show>
        </div>
    }
}
