use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::jobs::repository::find_duplicate_id;
use crate::models::{JobPosting, NewJob};

/// Postings loaded when no seed file is configured.
pub fn default_jobs() -> Vec<JobPosting> {
    vec![
        posting(
            "Senior Frontend Developer",
            "Engineering",
            &["JavaScript", "React", "TypeScript", "CSS", "HTML", "Redux"],
            &["web development", "frontend", "UI/UX", "responsive design"],
            5,
            "$90,000 - $120,000",
            "Bachelor in Computer Science or related field",
            "We're looking for an experienced frontend developer to join our team and help build amazing user experiences.",
        ),
        posting(
            "Full Stack Developer",
            "Technology",
            &["JavaScript", "Node.js", "React", "MongoDB", "Express", "SQL"],
            &["full stack", "web development", "API", "database"],
            3,
            "$75,000 - $100,000",
            "Computer Science degree or equivalent experience",
            "Join our dynamic team as a full stack developer working on cutting-edge web applications.",
        ),
        posting(
            "Backend Developer",
            "Engineering",
            &["Python", "Django", "SQL", "API", "AWS"],
            &["backend", "server", "database", "cloud"],
            4,
            "$85,000 - $110,000",
            "Computer Science degree preferred",
            "Looking for a backend developer with strong Python skills to build scalable APIs.",
        ),
        posting(
            "Junior Web Developer",
            "Development",
            &["HTML", "CSS", "JavaScript", "React"],
            &["web development", "frontend", "junior"],
            1,
            "$50,000 - $70,000",
            "Bootcamp or degree in related field",
            "Great opportunity for a junior developer to grow their skills in a supportive environment.",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn posting(
    title: &str,
    department: &str,
    skills: &[&str],
    keywords: &[&str],
    min_experience: u32,
    salary: &str,
    education: &str,
    description: &str,
) -> JobPosting {
    NewJob {
        title: title.to_string(),
        department: department.to_string(),
        required_skills: skills.iter().map(|s| s.to_string()).collect(),
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        min_experience,
        education: education.to_string(),
        salary: Some(salary.to_string()),
        description: description.to_string(),
    }
    .into_posting()
}

/// Reads a JSON array of postings to seed the repository.
pub fn load_jobs_file(path: &Path) -> Result<Vec<JobPosting>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read jobs file '{}'", path.display()))?;
    let jobs: Vec<JobPosting> = serde_json::from_str(&raw)
        .with_context(|| format!("Jobs file '{}' is not a valid JSON array of postings", path.display()))?;
    if let Some(id) = find_duplicate_id(&jobs) {
        bail!("Jobs file '{}' contains job id {id} more than once", path.display());
    }
    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_jobs_are_active_with_unique_ids() {
        let jobs = default_jobs();
        assert_eq!(jobs.len(), 4);
        assert!(jobs.iter().all(|j| j.is_active));
        let mut ids: Vec<_> = jobs.iter().map(|j| j.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_load_jobs_file_reads_legacy_layout() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{
                "id": 1717171717171,
                "title": "Data Engineer",
                "department": "Data",
                "skills": ["Python", "SQL"],
                "keywords": ["etl"],
                "experience": "3",
                "salary": "$80,000 - $100,000",
                "education": "Degree preferred",
                "description": "Build pipelines.",
                "createdAt": "2024-05-01T10:00:00.000Z",
                "isActive": true
            }}]"#
        )
        .unwrap();

        let jobs = load_jobs_file(file.path()).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Data Engineer");
        assert_eq!(jobs[0].min_experience, 3);
        assert!(jobs[0].is_active);
    }

    #[test]
    fn test_load_jobs_file_rejects_duplicate_ids() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "title": "A"}}, {{"id": "1", "title": "B"}}]"#
        )
        .unwrap();
        let err = load_jobs_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_load_jobs_file_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = load_jobs_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("not a valid JSON array"));
    }

    #[test]
    fn test_load_jobs_file_missing_path() {
        let err = load_jobs_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read jobs file"));
    }
}
