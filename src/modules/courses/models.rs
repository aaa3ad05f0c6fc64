use serde::{Deserialize, Serialize};

/// A single course and its author.
///
/// Fields missing from a request body decode to their zero value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Course {
    /// Server-assigned identifier
    pub courseid: String,
    /// Human-readable title; empty means absent
    pub coursename: String,
    /// Accepted on input, never sent to clients
    #[serde(skip_serializing)]
    pub price: i64,
    /// Owned author record, `null` when absent
    pub author: Option<Author>,
}

impl Course {
    /// A course without a name carries no data worth storing
    pub fn is_empty(&self) -> bool {
        self.coursename.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub fullname: String,
    pub website: String,
}

/// The two courses the service starts with when demo data is enabled.
pub fn demo_courses() -> Vec<Course> {
    vec![
        Course {
            courseid: "20".to_string(),
            coursename: "react".to_string(),
            price: 299,
            author: Some(Author {
                fullname: "ram".to_string(),
                website: "loco.dev".to_string(),
            }),
        },
        Course {
            courseid: "30".to_string(),
            coursename: "mern".to_string(),
            price: 399,
            author: Some(Author {
                fullname: "vijay".to_string(),
                website: "vijay.dev".to_string(),
            }),
        },
    ]
}
