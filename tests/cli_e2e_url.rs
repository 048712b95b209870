//! End-to-end tests for the `url` command.

#[allow(dead_code)]
mod common;
use common::prelude::*;

#[test]
fn test_url_of_fork_is_parent_page() {
    let fixture = TestFixture::new().with_repositories(files::MIXED);

    fixture
        .command()
        .args(["url", "me/desktop"])
        .assert()
        .success()
        .stdout("https://github.com/desktop/desktop\n");
}

#[test]
fn test_url_of_fork_itself() {
    let fixture = TestFixture::new().with_repositories(files::MIXED);

    fixture
        .command()
        .args(["url", "1", "--fork"])
        .assert()
        .success()
        .stdout("https://github.com/me/desktop\n");
}

#[test]
fn test_url_of_non_fork() {
    let fixture = TestFixture::new().with_repositories(files::MIXED);

    fixture
        .command()
        .args(["url", "4"])
        .assert()
        .success()
        .stdout("https://github.com/me/tutorial-repository\n");
}

#[test]
fn test_url_of_local_repository_fails() {
    let fixture = TestFixture::new().with_repositories(files::MIXED);

    fixture
        .command()
        .args(["url", "scratch"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains(
            "Repository scratch has no hosted web page",
        ));
}
