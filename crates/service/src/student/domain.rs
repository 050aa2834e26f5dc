use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

/// Collection path; self links and `Location` headers hang off it.
pub const STUDENTS_PATH: &str = "/students";

/// A student as stored and as accepted by `POST /students`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub surname: String,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), surname: surname.into() }
    }
}

impl From<models::student::Model> for Student {
    fn from(m: models::student::Model) -> Self {
        Self { id: m.id, name: m.name, surname: m.surname }
    }
}

impl From<Student> for models::student::Model {
    fn from(s: Student) -> Self {
        Self { id: s.id, name: s.name, surname: s.surname }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

/// Response view of a student: the stored fields plus a link to itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoratedStudent {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub links: Vec<Link>,
}

impl DecoratedStudent {
    pub fn self_href(&self) -> Option<&str> {
        self.links.iter().find(|l| l.rel == "self").map(|l| l.href.as_str())
    }
}

/// Bytes escaped when an id becomes a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// URL of `GET /students/{id}` under `base_url` (empty base gives a relative path).
/// The id is percent-encoded so the link always resolves back to the same student.
pub fn student_url(base_url: &str, id: &str) -> String {
    format!(
        "{}{}/{}",
        base_url.trim_end_matches('/'),
        STUDENTS_PATH,
        utf8_percent_encode(id, PATH_SEGMENT)
    )
}

pub fn decorate(student: Student, base_url: &str) -> DecoratedStudent {
    let href = student_url(base_url, &student.id);
    DecoratedStudent {
        id: student.id,
        name: student.name,
        surname: student.surname,
        links: vec![Link { rel: "self".into(), href }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decorate_adds_single_self_link() {
        let d = decorate(Student::new("s1", "Ada", "Lovelace"), "http://localhost:8888/");
        assert_eq!(d.id, "s1");
        assert_eq!(d.links.len(), 1);
        assert_eq!(d.self_href(), Some("http://localhost:8888/students/s1"));
    }

    #[test]
    fn relative_links_without_base() {
        assert_eq!(student_url("", "s1"), "/students/s1");
    }

    #[test]
    fn ids_are_encoded_as_one_path_segment() {
        assert_eq!(student_url("http://h", "x/y"), "http://h/students/x%2Fy");
        assert_eq!(student_url("http://h", "a b"), "http://h/students/a%20b");
        assert_eq!(student_url("http://h", "q?r"), "http://h/students/q%3Fr");
        assert_eq!(student_url("", "50%"), "/students/50%25");
        assert_eq!(student_url("", "a\u{1}b"), "/students/a%01b");
        assert_eq!(student_url("", "é"), "/students/%C3%A9");
    }

    #[test]
    fn plain_ids_are_untouched() {
        assert_eq!(student_url("", "s-1_a.b~c"), "/students/s-1_a.b~c");
    }

    #[test]
    fn serializes_with_links_array() {
        let d = decorate(Student::new("s1", "Ada", "Lovelace"), "http://h");
        let v = serde_json::to_value(&d).unwrap();
        assert_eq!(
            v,
            serde_json::json!({
                "id": "s1",
                "name": "Ada",
                "surname": "Lovelace",
                "links": [{"rel": "self", "href": "http://h/students/s1"}]
            })
        );
    }

    #[test]
    fn request_body_field_order_is_irrelevant() {
        let s: Student = serde_json::from_str(r#"{"name":"Ada","surname":"Lovelace","id":"s1"}"#).unwrap();
        assert_eq!(s, Student::new("s1", "Ada", "Lovelace"));
    }
}
