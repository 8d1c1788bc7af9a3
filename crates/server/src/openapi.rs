use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct StudentDoc { pub id: i64, pub name: String }

#[derive(ToSchema)]
pub struct StudentInputDoc { pub id: Option<i64>, pub name: Option<String> }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::students::list,
        crate::routes::students::get,
        crate::routes::students::create,
    ),
    components(
        schemas(
            HealthResponse,
            StudentDoc,
            StudentInputDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "students")
    )
)]
pub struct ApiDoc;
