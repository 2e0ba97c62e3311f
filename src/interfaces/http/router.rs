//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::FromRef, middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{BreedsService, PayloadRules, PetService, UserService};
use crate::config::StaticFilesConfig;
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::{
    ErrorListResponse, FieldErrorDto, ModelErrorDto, UpstreamErrorResponse,
};
use crate::interfaces::http::modules::{breeds, health, pets, users};
use crate::interfaces::http::request_id::request_id_middleware;

/// Unified router state. Axum extracts each handler's own state via `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub pet_service: Arc<PetService>,
    pub breeds_service: Arc<BreedsService>,
    pub rules: PayloadRules,
    pub repos: Arc<dyn RepositoryProvider>,
    pub started_at: Arc<Instant>,
    pub breeds_base_url: String,
}

impl AppState {
    pub fn new(
        user_service: Arc<UserService>,
        pet_service: Arc<PetService>,
        breeds_service: Arc<BreedsService>,
        repos: Arc<dyn RepositoryProvider>,
        breeds_base_url: String,
    ) -> Self {
        let rules = PayloadRules::new(user_service.clone());
        Self {
            user_service,
            pet_service,
            breeds_service,
            rules,
            repos,
            started_at: Arc::new(Instant::now()),
            breeds_base_url,
        }
    }
}

// -- FromRef implementations so each handler keeps its own State<T> extractor --

impl FromRef<AppState> for users::UserHandlerState {
    fn from_ref(s: &AppState) -> Self {
        users::UserHandlerState {
            user_service: Arc::clone(&s.user_service),
            rules: s.rules.clone(),
        }
    }
}

impl FromRef<AppState> for pets::PetHandlerState {
    fn from_ref(s: &AppState) -> Self {
        pets::PetHandlerState {
            pet_service: Arc::clone(&s.pet_service),
            rules: s.rules.clone(),
        }
    }
}

impl FromRef<AppState> for breeds::BreedsHandlerState {
    fn from_ref(s: &AppState) -> Self {
        breeds::BreedsHandlerState {
            breeds_service: Arc::clone(&s.breeds_service),
            base_url: s.breeds_base_url.clone(),
        }
    }
}

impl FromRef<AppState> for health::HealthState {
    fn from_ref(s: &AppState) -> Self {
        health::HealthState {
            repos: Arc::clone(&s.repos),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        // Pets
        pets::list_pets,
        pets::get_pet,
        pets::create_pet,
        pets::update_pet,
        pets::delete_pet,
        // Breeds
        breeds::list_breeds,
    ),
    components(
        schemas(
            // Errors
            ModelErrorDto,
            FieldErrorDto,
            ErrorListResponse,
            UpstreamErrorResponse,
            // Users
            users::UserDto,
            users::CreateUserRequest,
            users::UpdateUserRequest,
            // Pets
            pets::OwnerDto,
            pets::PetDto,
            pets::PetRequest,
            // Breeds
            breeds::BreedsResponse,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Users", description = "Pet owner management"),
        (name = "Pets", description = "Pet management; every pet belongs to a user"),
        (name = "Breeds", description = "Breed names by animal from the static catalogue"),
    ),
    info(
        title = "Pets Service API",
        version = "1.0.0",
        description = "REST API for managing users and their pets",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(state: AppState, static_files: &StaticFilesConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check))
        // Users
        .route("/user", get(users::list_users).post(users::create_user))
        .route(
            "/user/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        // Pets
        .route("/pet", get(pets::list_pets).post(pets::create_pet))
        .route(
            "/pet/{id}",
            get(pets::get_pet).put(pets::update_pet).delete(pets::delete_pet),
        )
        // Breeds
        .route("/breeds/{animal}", get(breeds::list_breeds))
        .with_state(state)
        // Static files (breed catalogue lives here)
        .nest_service(&static_files.mount_path, ServeDir::new(&static_files.dir))
        // Middleware
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
