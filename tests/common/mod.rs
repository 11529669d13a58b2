use gitfolio::types::RepoDescriptor;

pub fn repo(name: &str, description: Option<&str>, topics: &[&str], fork: bool) -> RepoDescriptor {
    RepoDescriptor {
        name: name.to_string(),
        description: description.map(String::from),
        topics: topics.iter().map(|t| t.to_string()).collect(),
        html_url: format!("https://github.com/octocat/{}", name),
        fork,
    }
}
