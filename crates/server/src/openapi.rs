use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorResponseDoc { pub message: String }

#[derive(ToSchema)]
pub struct StudentDoc { pub id: String, pub name: String, pub surname: String }

#[derive(ToSchema)]
pub struct LinkDoc { pub rel: String, pub href: String }

#[derive(ToSchema)]
pub struct DecoratedStudentDoc {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub links: Vec<LinkDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::hello::hello,
        crate::routes::students::list,
        crate::routes::students::create,
        crate::routes::students::get,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponseDoc,
            StudentDoc,
            LinkDoc,
            DecoratedStudentDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "hello"),
        (name = "students")
    )
)]
pub struct ApiDoc;
