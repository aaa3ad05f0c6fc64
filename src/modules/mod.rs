pub mod courses;

use std::sync::Arc;

use courses_kernel::{settings::Settings, ModuleRegistry};

use courses::{models::demo_courses, store::CourseStore};

/// Register all project-specific modules with the registry.
///
/// Returns the course store so the composition root can hold on to it.
pub fn register_all(registry: &mut ModuleRegistry, settings: &Settings) -> Arc<CourseStore> {
    if settings.database.enabled {
        registry.register_core(Arc::new(courses_db::DbModule::new()));
    }

    let store = if settings.courses.seed_demo_data {
        CourseStore::with_courses(demo_courses())
    } else {
        CourseStore::new()
    };
    let store = Arc::new(store);
    registry.register_custom(courses::create_module(Arc::clone(&store)));

    store
}
