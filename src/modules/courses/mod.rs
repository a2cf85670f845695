pub mod error;
pub mod handlers;
pub mod models;
pub mod store;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    routing::{get, post},
    Router,
};
use catalog_kernel::{InitCtx, Module};
use serde_json::json;

use store::CourseStore;

/// Courses module: CRUD over the in-memory course catalog
pub struct CoursesModule {
    store: Arc<CourseStore>,
}

impl CoursesModule {
    pub fn new() -> Self {
        Self::with_store(Arc::new(CourseStore::new()))
    }

    pub fn with_store(store: Arc<CourseStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<CourseStore> {
        &self.store
    }
}

impl Default for CoursesModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Module for CoursesModule {
    fn name(&self) -> &'static str {
        "courses"
    }

    fn base_path(&self) -> String {
        "/".to_string()
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        if ctx.settings.courses.seed && self.store.is_empty().await {
            let seeded = self.store.seed().await;
            tracing::info!(module = self.name(), count = seeded.len(), "seeded demo courses");
        }

        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "courses module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", get(handlers::home))
            .route("/courses", get(handlers::list_courses))
            .route("/course", post(handlers::create_course))
            .route(
                "/course/{id}",
                get(handlers::get_course)
                    .put(handlers::replace_course)
                    .delete(handlers::delete_course),
            )
            .with_state(self.store.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let error_responses = json!({
            "400": {
                "description": "Invalid id, missing body, or malformed JSON",
                "content": {
                    "application/json": {
                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                    }
                }
            },
            "404": {
                "description": "Course not found",
                "content": {
                    "application/json": {
                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                    }
                }
            },
            "422": {
                "description": "Course name is empty",
                "content": {
                    "application/json": {
                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                    }
                }
            }
        });

        let course_response = |description: &str| {
            json!({
                "description": description,
                "content": {
                    "application/json": {
                        "schema": { "$ref": "#/components/schemas/Course" }
                    }
                }
            })
        };

        let course_body = json!({
            "required": true,
            "content": {
                "application/json": {
                    "schema": { "$ref": "#/components/schemas/CourseInput" }
                }
            }
        });

        let id_param = json!([{
            "name": "id",
            "in": "path",
            "required": true,
            "schema": { "type": "string", "format": "uuid" }
        }]);

        let with_errors = |mut responses: serde_json::Value| {
            if let (Some(target), Some(errors)) =
                (responses.as_object_mut(), error_responses.as_object())
            {
                for (code, response) in errors {
                    target.insert(code.clone(), response.clone());
                }
            }
            responses
        };

        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "Welcome banner",
                        "tags": ["Courses"],
                        "responses": {
                            "200": {
                                "description": "HTML banner",
                                "content": { "text/html": { "schema": { "type": "string" } } }
                            }
                        }
                    }
                },
                "/courses": {
                    "get": {
                        "summary": "List courses",
                        "tags": ["Courses"],
                        "responses": {
                            "200": {
                                "description": "All courses in insertion order",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": { "$ref": "#/components/schemas/Course" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/course": {
                    "post": {
                        "summary": "Create a course",
                        "tags": ["Courses"],
                        "requestBody": course_body.clone(),
                        "responses": with_errors(json!({ "200": course_response("Created course") }))
                    }
                },
                "/course/{id}": {
                    "get": {
                        "summary": "Get a course",
                        "tags": ["Courses"],
                        "parameters": id_param.clone(),
                        "responses": with_errors(json!({ "200": course_response("The course") }))
                    },
                    "put": {
                        "summary": "Replace a course, keeping its id",
                        "tags": ["Courses"],
                        "parameters": id_param.clone(),
                        "requestBody": course_body,
                        "responses": with_errors(json!({ "200": course_response("Replaced course") }))
                    },
                    "delete": {
                        "summary": "Delete a course",
                        "tags": ["Courses"],
                        "parameters": id_param,
                        "responses": with_errors(json!({
                            "200": {
                                "description": "Confirmation message",
                                "content": {
                                    "application/json": { "schema": { "type": "string" } }
                                }
                            }
                        }))
                    }
                }
            },
            "components": {
                "schemas": {
                    "Author": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string", "description": "Full name of the author" },
                            "website": { "type": "string" }
                        }
                    },
                    "Course": {
                        "type": "object",
                        "properties": {
                            "courseid": { "type": "string", "format": "uuid" },
                            "name": { "type": "string" },
                            "price": { "type": "integer", "format": "int64" },
                            "author": {
                                "oneOf": [
                                    { "$ref": "#/components/schemas/Author" },
                                    { "type": "null" }
                                ]
                            }
                        },
                        "required": ["courseid", "name", "price"]
                    },
                    "CourseInput": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string", "minLength": 1 },
                            "price": { "type": "integer", "format": "int64" },
                            "author": {
                                "oneOf": [
                                    { "$ref": "#/components/schemas/Author" },
                                    { "type": "null" }
                                ]
                            }
                        },
                        "required": ["name"]
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "courses module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        let remaining = self.store.len().await;
        tracing::info!(module = self.name(), remaining, "courses module stopped");
        Ok(())
    }
}

/// Create a new instance of the courses module
pub fn create_module() -> Arc<dyn Module> {
    Arc::new(CoursesModule::new())
}
