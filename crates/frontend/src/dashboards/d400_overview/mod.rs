mod chart;

use crate::shared::embedded::read_embedded_or_default;
use crate::shared::format::format_brl;
use chart::{donut_segments, polyline_points};
use contracts::shared::embedded::KpiData;
use leptos::prelude::*;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 200.0;
const DONUT_RADIUS: f64 = 60.0;

const PALETTE: [&str; 7] = [
    "#2563eb", "#16a34a", "#d97706", "#dc2626", "#7c3aed", "#0891b2", "#6b7280",
];

/// Overview dashboard: KPI cards plus the revenue/expense line chart and the
/// category doughnut, all drawn from the embedded `kpi-data` payload.
#[component]
#[allow(non_snake_case)]
pub fn OverviewDashboard() -> impl IntoView {
    let kpi = read_embedded_or_default::<KpiData>("kpi-data");

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Visão Geral"}</h1>
                </div>
            </div>

            <div class="kpi-cards">
                <KpiCard title="Faturamento do mês" value=format_brl(kpi.faturamento_mes) />
                <KpiCard title="Despesas do mês" value=format_brl(kpi.despesas_mes) />
                <KpiCard title="Serviços em aberto" value=kpi.servicos_abertos.to_string() />
                <KpiCard title="Ticket médio" value=format_brl(kpi.ticket_medio) />
            </div>

            <div class="panel">
                <h2 class="panel__title">{"Receitas × Despesas"}</h2>
                <LineChart data=kpi.grafico.clone() />
            </div>

            <div class="panel">
                <h2 class="panel__title">{"Despesas por categoria"}</h2>
                <CategoryDonut
                    labels=kpi.categorias.labels.clone()
                    valores=kpi.categorias.valores.clone()
                />
            </div>
        </div>
    }
}

#[component]
fn KpiCard(title: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="kpi-card">
            <span class="kpi-card__title">{title}</span>
            <span class="kpi-card__value">{value}</span>
        </div>
    }
}

#[component]
fn LineChart(data: contracts::shared::embedded::ChartData) -> impl IntoView {
    if data.receitas.is_empty() && data.despesas.is_empty() {
        return view! { <div class="empty-state">{"Sem dados para o período."}</div> }.into_any();
    }

    let max = data
        .receitas
        .iter()
        .chain(data.despesas.iter())
        .cloned()
        .fold(0.0_f64, f64::max);

    let receitas_pts = polyline_points(&data.receitas, max, CHART_WIDTH, CHART_HEIGHT);
    let despesas_pts = polyline_points(&data.despesas, max, CHART_WIDTH, CHART_HEIGHT);

    view! {
        <div class="chart">
            <svg
                viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
                class="chart__svg"
                preserveAspectRatio="none"
            >
                <polyline class="chart__line chart__line--receitas" fill="none" points=receitas_pts />
                <polyline class="chart__line chart__line--despesas" fill="none" points=despesas_pts />
            </svg>
            <div class="chart__labels">
                {data
                    .labels
                    .iter()
                    .map(|l| view! { <span class="chart__label">{l.clone()}</span> })
                    .collect_view()}
            </div>
            <div class="chart__legend">
                <span class="chart__legend-item chart__legend-item--receitas">{"Receitas"}</span>
                <span class="chart__legend-item chart__legend-item--despesas">{"Despesas"}</span>
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn CategoryDonut(labels: Vec<String>, valores: Vec<f64>) -> impl IntoView {
    let segments = donut_segments(&valores);
    if segments.is_empty() {
        return view! { <div class="empty-state">{"Nenhuma despesa categorizada."}</div> }
            .into_any();
    }

    let circumference = 2.0 * std::f64::consts::PI * DONUT_RADIUS;

    view! {
        <div class="donut">
            <svg viewBox="0 0 160 160" class="donut__svg">
                {segments
                    .iter()
                    .enumerate()
                    .filter(|(_, seg)| seg.fraction > 0.0)
                    .map(|(i, seg)| {
                        let dash = seg.fraction * circumference;
                        let gap = circumference - dash;
                        let offset = -seg.offset * circumference;
                        view! {
                            <circle
                                cx="80"
                                cy="80"
                                r=DONUT_RADIUS.to_string()
                                fill="none"
                                stroke=PALETTE[i % PALETTE.len()]
                                stroke-width="24"
                                stroke-dasharray=format!("{dash:.2} {gap:.2}")
                                stroke-dashoffset=format!("{offset:.2}")
                                transform="rotate(-90 80 80)"
                            ></circle>
                        }
                    })
                    .collect_view()}
            </svg>
            <ul class="donut__legend">
                {labels
                    .iter()
                    .zip(valores.iter())
                    .enumerate()
                    .map(|(i, (label, valor))| {
                        view! {
                            <li class="donut__legend-item">
                                <span
                                    class="donut__swatch"
                                    style=format!(
                                        "background: {};",
                                        PALETTE[i % PALETTE.len()],
                                    )
                                ></span>
                                {format!("{label} — {}", format_brl(*valor))}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
    .into_any()
}
