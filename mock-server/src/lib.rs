use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

pub const API_KEY_HEADER: &str = "api_key";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: u64,
    pub name: String,
    pub default_weight: f32,
}

#[derive(Deserialize)]
pub struct ExerciseInput {
    pub name: String,
    #[serde(default = "default_weight")]
    pub default_weight: f32,
}

fn default_weight() -> f32 {
    5.0
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    pub id: u64,
    pub display_name: String,
    pub overload_rate: f32,
    pub exercises_per_workout: i32,
    pub target_reps_per_set: i32,
    pub target_sets_per_exercise: i32,
}

#[derive(Deserialize)]
pub struct StrategyInput {
    pub display_name: String,
    pub overload_rate: f32,
    pub exercises_per_workout: i32,
    pub target_reps_per_set: i32,
    pub target_sets_per_exercise: i32,
}

/// Both collections share one id sequence.
#[derive(Default)]
pub struct Db {
    next_id: u64,
    exercises: BTreeMap<u64, Exercise>,
    strategies: BTreeMap<u64, Strategy>,
}

impl Db {
    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// A row type stored in one of the `Db` tables.
pub trait Record: Clone + Serialize + Send + Sync + 'static {
    type Input: DeserializeOwned + Send + 'static;

    fn table(db: &Db) -> &BTreeMap<u64, Self>;
    fn table_mut(db: &mut Db) -> &mut BTreeMap<u64, Self>;
    fn from_input(id: u64, input: Self::Input) -> Self;
}

impl Record for Exercise {
    type Input = ExerciseInput;

    fn table(db: &Db) -> &BTreeMap<u64, Self> {
        &db.exercises
    }

    fn table_mut(db: &mut Db) -> &mut BTreeMap<u64, Self> {
        &mut db.exercises
    }

    fn from_input(id: u64, input: ExerciseInput) -> Self {
        Exercise {
            id,
            name: input.name,
            default_weight: input.default_weight,
        }
    }
}

impl Record for Strategy {
    type Input = StrategyInput;

    fn table(db: &Db) -> &BTreeMap<u64, Self> {
        &db.strategies
    }

    fn table_mut(db: &mut Db) -> &mut BTreeMap<u64, Self> {
        &mut db.strategies
    }

    fn from_input(id: u64, input: StrategyInput) -> Self {
        Strategy {
            id,
            display_name: input.display_name,
            overload_rate: input.overload_rate,
            exercises_per_workout: input.exercises_per_workout,
            target_reps_per_set: input.target_reps_per_set,
            target_sets_per_exercise: input.target_sets_per_exercise,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    api_key: Arc<str>,
    db: Arc<RwLock<Db>>,
}

type Rejection = (StatusCode, &'static str);

const NOT_FOUND: Rejection = (StatusCode::NOT_FOUND, "not found");

/// Router serving `/api/exercises` and `/api/strategies`. Every request must
/// carry `api_key: <api_key>`.
pub fn app(api_key: &str) -> Router {
    let state = AppState {
        api_key: Arc::from(api_key),
        db: Arc::new(RwLock::new(Db::default())),
    };
    Router::new()
        .route(
            "/api/exercises",
            get(list::<Exercise>).post(create::<Exercise>),
        )
        .route(
            "/api/exercises/{id}",
            get(fetch::<Exercise>)
                .put(update::<Exercise>)
                .delete(remove::<Exercise>),
        )
        .route(
            "/api/strategies",
            get(list::<Strategy>).post(create::<Strategy>),
        )
        .route(
            "/api/strategies/{id}",
            get(fetch::<Strategy>)
                .put(update::<Strategy>)
                .delete(remove::<Strategy>),
        )
        .with_state(state)
}

pub async fn run(listener: TcpListener, api_key: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(api_key)).await
}

fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), Rejection> {
    let presented = headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok());
    if presented == Some(&*state.api_key) {
        Ok(())
    } else {
        tracing::warn!("rejected request with invalid api key");
        Err((StatusCode::UNAUTHORIZED, "invalid api key"))
    }
}

async fn list<R: Record>(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<R>>, Rejection> {
    authorize(&state, &headers)?;
    let db = state.db.read().await;
    Ok(Json(R::table(&db).values().cloned().collect()))
}

async fn create<R: Record>(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<R::Input>,
) -> Result<(StatusCode, Json<R>), Rejection> {
    authorize(&state, &headers)?;
    let mut db = state.db.write().await;
    let id = db.allocate_id();
    let record = R::from_input(id, input);
    R::table_mut(&mut db).insert(id, record.clone());
    tracing::info!(id, "created record");
    Ok((StatusCode::CREATED, Json(record)))
}

async fn fetch<R: Record>(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<Json<R>, Rejection> {
    authorize(&state, &headers)?;
    let db = state.db.read().await;
    R::table(&db).get(&id).cloned().map(Json).ok_or(NOT_FOUND)
}

async fn update<R: Record>(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(input): Json<R::Input>,
) -> Result<Json<R>, Rejection> {
    authorize(&state, &headers)?;
    let mut db = state.db.write().await;
    let slot = R::table_mut(&mut db).get_mut(&id).ok_or(NOT_FOUND)?;
    *slot = R::from_input(id, input);
    Ok(Json(slot.clone()))
}

async fn remove<R: Record>(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<StatusCode, Rejection> {
    authorize(&state, &headers)?;
    let mut db = state.db.write().await;
    R::table_mut(&mut db).remove(&id).ok_or(NOT_FOUND)?;
    tracing::info!(id, "deleted record");
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exercise_serializes_to_json() {
        let exercise = Exercise {
            id: 7,
            name: "Bench Press".to_string(),
            default_weight: 45.0,
        };
        let json = serde_json::to_value(&exercise).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Bench Press");
        assert_eq!(json["default_weight"], 45.0);
    }

    #[test]
    fn exercise_input_defaults_weight_to_five() {
        let input: ExerciseInput = serde_json::from_str(r#"{"name":"Row"}"#).unwrap();
        assert_eq!(input.default_weight, 5.0);
    }

    #[test]
    fn exercise_input_rejects_missing_name() {
        let result: Result<ExerciseInput, _> = serde_json::from_str(r#"{"default_weight":10}"#);
        assert!(result.is_err());
    }

    #[test]
    fn strategy_input_requires_every_field() {
        let result: Result<StrategyInput, _> =
            serde_json::from_str(r#"{"display_name":"x","overload_rate":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn ids_are_shared_across_tables() {
        let mut db = Db::default();
        assert_eq!(db.allocate_id(), 1);
        assert_eq!(db.allocate_id(), 2);
    }
}
