pub mod models;
pub mod routes;
pub mod store;

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use courses_kernel::{InitCtx, Module};
use serde_json::json;

use store::CourseStore;

/// Courses module: the in-memory catalogue and its CRUD routes
pub struct CoursesModule {
    store: Arc<CourseStore>,
}

impl CoursesModule {
    pub fn new(store: Arc<CourseStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Module for CoursesModule {
    fn name(&self) -> &'static str {
        "courses"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let courses = self.store.len().await;
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            courses,
            "courses module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(Arc::clone(&self.store))
    }

    fn mount_path(&self) -> String {
        "/".to_string()
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let error_response = json!({
            "description": "Error",
            "content": {
                "application/json": {
                    "schema": { "$ref": "#/components/schemas/ErrorResponse" }
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
            "schema": { "type": "string" }
        }]);

        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "Welcome page",
                        "tags": ["Courses"],
                        "responses": {
                            "200": {
                                "description": "HTML greeting",
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
                        "responses": {
                            "201": course_response("Created course with its assigned id"),
                            "400": error_response.clone()
                        }
                    }
                },
                "/course/{id}": {
                    "get": {
                        "summary": "Get a course",
                        "tags": ["Courses"],
                        "parameters": id_param.clone(),
                        "responses": {
                            "200": course_response("The course"),
                            "404": error_response.clone()
                        }
                    },
                    "put": {
                        "summary": "Replace a course",
                        "tags": ["Courses"],
                        "parameters": id_param.clone(),
                        "requestBody": course_body,
                        "responses": {
                            "200": course_response("The replacement, id pinned to the path"),
                            "400": error_response.clone(),
                            "404": error_response.clone()
                        }
                    },
                    "delete": {
                        "summary": "Delete a course",
                        "tags": ["Courses"],
                        "parameters": id_param,
                        "responses": {
                            "200": {
                                "description": "Confirmation message",
                                "content": {
                                    "application/json": { "schema": { "type": "string" } }
                                }
                            },
                            "404": error_response
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Author": {
                        "type": "object",
                        "properties": {
                            "fullname": { "type": "string" },
                            "website": { "type": "string" }
                        }
                    },
                    "Course": {
                        "type": "object",
                        "properties": {
                            "courseid": {
                                "type": "string",
                                "description": "Server-assigned identifier"
                            },
                            "coursename": { "type": "string" },
                            "author": {
                                "oneOf": [
                                    { "$ref": "#/components/schemas/Author" },
                                    { "type": "null" }
                                ]
                            }
                        },
                        "required": ["courseid", "coursename", "author"]
                    },
                    "CourseInput": {
                        "type": "object",
                        "properties": {
                            "coursename": {
                                "type": "string",
                                "description": "Must be non-empty on create"
                            },
                            "price": { "type": "integer", "format": "int64" },
                            "author": { "$ref": "#/components/schemas/Author" }
                        }
                    }
                }
            }
        }))
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "courses module stopped");
        Ok(())
    }
}

/// Create a courses module around `store`
pub fn create_module(store: Arc<CourseStore>) -> Arc<dyn Module> {
    Arc::new(CoursesModule::new(store))
}
