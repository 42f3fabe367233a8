//! Form inputs and their validation rules. Each form carries an explicit
//! `validate` method returning every failed rule, so handlers can re-render
//! the page with the full error list.

use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PostForm {
    pub title: String,
    pub description: String,
    pub course_id: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CommentForm {
    pub comment_detail: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CourseSearchForm {
    /// Selected course id; the search form allows a blank selection
    pub options: Option<i32>,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        check_length(&mut errors, "username", &self.username, 4, 15);
        check_length(&mut errors, "password", &self.password, 8, 80);
        finish(errors)
    }
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        check_length(&mut errors, "username", &self.username, 4, 15);
        check_length(&mut errors, "password", &self.password, 8, 80);
        if self.email.len() > 50 {
            errors.push("email must be at most 50 characters".to_owned());
        }
        if !email_is_well_formed(&self.email) {
            errors.push("Invalid email".to_owned());
        }
        finish(errors)
    }
}

impl PostForm {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push("title is required".to_owned());
        }
        if self.title.len() > 100 {
            errors.push("title must be at most 100 characters".to_owned());
        }
        if self.description.trim().is_empty() {
            errors.push("description is required".to_owned());
        }
        finish(errors)
    }
}

impl CommentForm {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        if self.comment_detail.trim().is_empty() {
            errors.push("comment text is required".to_owned());
        }
        finish(errors)
    }
}

impl CourseSearchForm {
    pub fn validate(&self) -> Result<i32, Vec<String>> {
        self.options
            .ok_or_else(|| vec!["select a course".to_owned()])
    }
}

fn check_length(errors: &mut Vec<String>, field: &str, value: &str, min: usize, max: usize) {
    let len = value.chars().count();
    if len < min || len > max {
        errors.push(format!("{field} must be between {min} and {max} characters"));
    }
}

/// Minimal well-formedness check: one `@`, non-empty local part, and a
/// domain with a dot. Deliverability is not our problem.
fn email_is_well_formed(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

fn finish(errors: Vec<String>) -> Result<(), Vec<String>> {
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_form_bounds() {
        let ok = LoginForm {
            username: "richie".to_owned(),
            password: "password123".to_owned(),
        };
        assert!(ok.validate().is_ok());

        let short = LoginForm {
            username: "abc".to_owned(),
            password: "short".to_owned(),
        };
        let errors = short.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn register_form_rejects_bad_email() {
        let form = RegisterForm {
            username: "richie".to_owned(),
            email: "not-an-email".to_owned(),
            password: "password123".to_owned(),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.iter().any(|e| e == "Invalid email"));
    }

    #[test]
    fn email_well_formedness() {
        assert!(email_is_well_formed("a@b.com"));
        assert!(!email_is_well_formed("a@b"));
        assert!(!email_is_well_formed("@b.com"));
        assert!(!email_is_well_formed("a@.com"));
        assert!(!email_is_well_formed("a b@c.com"));
    }

    #[test]
    fn post_form_requires_title_and_body() {
        let form = PostForm {
            title: "  ".to_owned(),
            description: String::new(),
            course_id: 1,
        };
        assert_eq!(form.validate().unwrap_err().len(), 2);

        let long_title = PostForm {
            title: "x".repeat(101),
            description: "body".to_owned(),
            course_id: 1,
        };
        assert_eq!(long_title.validate().unwrap_err().len(), 1);
    }

    #[test]
    fn search_form_requires_selection() {
        assert!(CourseSearchForm { options: None }.validate().is_err());
        assert_eq!(CourseSearchForm { options: Some(3) }.validate(), Ok(3));
    }
}
