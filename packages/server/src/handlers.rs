//! HTTP handler functions for the flood map API.

use actix_web::{HttpResponse, web};
use flood_map_analytics::{charts, filter::filter_rows, summary::week_summary};
use flood_map_server_models::{
    ApiBarChart, ApiFilterOptions, ApiHealth, ApiMapChart, ApiPieChart, ApiSummary,
    ChartQueryParams, SummaryQueryParams,
};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/filters`
///
/// Returns the selectable weeks and cities plus the week the dashboard
/// should preselect.
pub async fn filters(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiFilterOptions::from(state.dataset.as_ref()))
}

/// `GET /api/charts/bar`
///
/// Rainfall per city for the selected week, optionally narrowed to one
/// city. One bar per survey row.
pub async fn bar_chart(
    state: web::Data<AppState>,
    params: web::Query<ChartQueryParams>,
) -> HttpResponse {
    let rows = filter_rows(
        state.dataset.records(),
        &params.week,
        params.city.as_deref(),
    );
    let chart = charts::bar_chart(&rows, &params.week, params.city.as_deref());
    HttpResponse::Ok().json(ApiBarChart::from(chart))
}

/// `GET /api/charts/pie`
///
/// Risk level distribution for the selected week and optional city.
pub async fn pie_chart(
    state: web::Data<AppState>,
    params: web::Query<ChartQueryParams>,
) -> HttpResponse {
    let rows = filter_rows(
        state.dataset.records(),
        &params.week,
        params.city.as_deref(),
    );
    HttpResponse::Ok().json(ApiPieChart::from(charts::pie_chart(&rows)))
}

/// `GET /api/charts/map`
///
/// Geographic risk markers for the selected week and optional city. When
/// the chart cannot be generated the error placeholder payload is served
/// with HTTP 200 so the dashboard shows the message where the map would be.
pub async fn map_chart(
    state: web::Data<AppState>,
    params: web::Query<ChartQueryParams>,
) -> HttpResponse {
    let rows = filter_rows(
        state.dataset.records(),
        &params.week,
        params.city.as_deref(),
    );
    match charts::map_chart(&rows) {
        Ok(chart) => HttpResponse::Ok().json(ApiMapChart::from(chart)),
        Err(e) => {
            log::error!("Failed to build map chart: {e}");
            HttpResponse::Ok().json(ApiMapChart::error_placeholder())
        }
    }
}

/// `GET /api/summary`
///
/// Week-wide totals across every city. The summary cards describe the whole
/// week, so no city parameter exists here.
pub async fn summary(
    state: web::Data<AppState>,
    params: web::Query<SummaryQueryParams>,
) -> HttpResponse {
    HttpResponse::Ok().json(ApiSummary::from(week_summary(
        state.dataset.records(),
        &params.week,
    )))
}
