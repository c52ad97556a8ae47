//! In-process stand-in for the tracker service, used by integration tests
//! and runnable as a standalone binary.
//!
//! Serves the two upstream endpoints over a fixed sample dataset. The DTOs
//! here are defined independently from the tracker-core crate; integration
//! tests catch schema drift between the two.

use std::{collections::BTreeMap, collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Report {
    pub confirmed: Option<u64>,
    pub deaths: Option<u64>,
    pub recovered: Option<u64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Timeline {
    pub timeline: BTreeMap<String, u64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Timelines {
    pub confirmed: Timeline,
    pub deaths: Timeline,
    pub recovered: Timeline,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Location {
    pub id: u32,
    pub country: String,
    pub country_code: String,
    pub latest: Report,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timelines: Option<Timelines>,
}

#[derive(Serialize)]
struct LatestResponse {
    latest: Report,
}

#[derive(Serialize)]
struct LocationResponse {
    location: Location,
}

#[derive(Deserialize)]
struct LocationsQuery {
    #[serde(default)]
    timelines: bool,
}

/// Read-only dataset shared by the handlers.
pub struct Dataset {
    pub latest: Report,
    pub locations: HashMap<u32, Location>,
}

pub type Db = Arc<Dataset>;

fn timeline(entries: &[(&str, u64)]) -> Timeline {
    Timeline {
        timeline: entries.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
    }
}

/// Fixed sample data. Location 16 deliberately has one date
/// (`2020-04-04`) present only in its confirmed timeline, so partial-hit
/// lookups are exercisable end to end.
pub fn sample_dataset() -> Dataset {
    let italy = Location {
        id: 16,
        country: "Italy".to_string(),
        country_code: "IT".to_string(),
        latest: Report {
            confirmed: Some(124632),
            deaths: Some(15362),
            recovered: Some(20996),
        },
        timelines: Some(Timelines {
            confirmed: timeline(&[
                ("2020-04-04T00:00:00Z", 119827),
                ("2020-04-05T00:00:00Z", 124632),
            ]),
            deaths: timeline(&[("2020-04-05T00:00:00Z", 15362)]),
            recovered: timeline(&[("2020-04-05T00:00:00Z", 20996)]),
        }),
    };
    let germany = Location {
        id: 58,
        country: "Germany".to_string(),
        country_code: "DE".to_string(),
        latest: Report {
            confirmed: Some(100123),
            deaths: Some(1584),
            recovered: Some(28700),
        },
        timelines: Some(Timelines {
            confirmed: timeline(&[
                ("2020-04-04T00:00:00Z", 96092),
                ("2020-04-05T00:00:00Z", 100123),
            ]),
            deaths: timeline(&[
                ("2020-04-04T00:00:00Z", 1444),
                ("2020-04-05T00:00:00Z", 1584),
            ]),
            recovered: timeline(&[
                ("2020-04-04T00:00:00Z", 26400),
                ("2020-04-05T00:00:00Z", 28700),
            ]),
        }),
    };
    Dataset {
        latest: Report {
            confirmed: Some(224755),
            deaths: Some(16946),
            recovered: Some(49696),
        },
        locations: HashMap::from([(italy.id, italy), (germany.id, germany)]),
    }
}

pub fn app() -> Router {
    let db: Db = Arc::new(sample_dataset());
    Router::new()
        .route("/latest", get(get_latest))
        .route("/locations/{id}", get(get_location))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_latest(State(db): State<Db>) -> Json<LatestResponse> {
    Json(LatestResponse {
        latest: db.latest.clone(),
    })
}

async fn get_location(
    State(db): State<Db>,
    Path(id): Path<u32>,
    Query(query): Query<LocationsQuery>,
) -> Result<Json<LocationResponse>, StatusCode> {
    let mut location = db.locations.get(&id).cloned().ok_or(StatusCode::NOT_FOUND)?;
    if !query.timelines {
        location.timelines = None;
    }
    Ok(Json(LocationResponse { location }))
}
