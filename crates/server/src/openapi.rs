use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct EnvironmentsDoc {
    pub development: Option<String>,
    pub staging: Option<String>,
    pub production: Option<String>,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct ApiRecordInputDoc {
    pub id: Option<String>,
    pub githubId: u64,
    pub name: String,
    pub baseUrl: EnvironmentsDoc,
    pub githubUrl: String,
    /// `{ apis, scripts, databases }`, each a list.
    #[schema(value_type = Object)]
    pub dependencies: Option<serde_json::Value>,
    /// ACTIVE, DEPRECATION_WARNING or DEPRECATED
    pub status: Option<String>,
    #[schema(value_type = Object)]
    pub otherDocumentation: Option<serde_json::Value>,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct ApiRecordOutputDoc {
    pub id: String,
    pub githubId: u64,
    pub name: String,
    pub baseUrl: EnvironmentsDoc,
    pub githubUrl: String,
    #[schema(value_type = Object)]
    pub dependencies: serde_json::Value,
    pub status: Option<String>,
    #[schema(value_type = Object)]
    pub otherDocumentation: serde_json::Value,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct ApiRecordSummaryDoc { pub id: String, pub githubId: u64, pub name: String }

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct ValidationErrorsDoc { pub validationErrors: Vec<String> }

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct ErrorMessageDoc { pub userMessage: String, pub errorMessage: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::create_api,
        crate::routes::list_apis,
        crate::routes::get_api,
        crate::routes::patch_api,
    ),
    components(
        schemas(
            HealthResponse,
            EnvironmentsDoc,
            ApiRecordInputDoc,
            ApiRecordOutputDoc,
            ApiRecordSummaryDoc,
            ValidationErrorsDoc,
            ErrorMessageDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "apis")
    )
)]
pub struct ApiDoc;
