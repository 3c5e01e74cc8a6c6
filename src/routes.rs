use crate::*;
use actix_web::{web, HttpRequest, HttpResponse};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(list_todos))
            .route(web::post().to(create_todo))
            .default_service(web::to(method_not_allowed)),
    );
}

async fn list_todos(store: web::Data<TodoStore>) -> HttpResponse {
    let todos = store.list().await;
    tracing::info!(count = todos.len(), "GET todos");
    HttpResponse::Ok().json(todos)
}

async fn create_todo(
    store: web::Data<TodoStore>,
    bytes: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let todo = Todo::from_json(&bytes).map_err(|e| {
        tracing::warn!(error = %e, "rejected malformed todo");
        ApiError::MalformedTodo(e)
    })?;

    let count = store.append(todo.clone()).await;
    tracing::info!(title = %todo.title, count, "POST todo");
    Ok(HttpResponse::Created().json(todo))
}

async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    tracing::info!(method = %req.method(), "method not allowed");
    Err(ApiError::MethodNotAllowed)
}
