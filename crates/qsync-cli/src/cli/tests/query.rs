//! Tests for merge, remove, subjects and config.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_merge() {
    match parse(&["qsync", "merge", "page=2", "subject", "biology"]) {
        CliCommand::Merge {
            query,
            key,
            value,
            path,
        } => {
            assert_eq!(query, "page=2");
            assert_eq!(key, "subject");
            assert_eq!(value, "biology");
            assert!(path.is_none());
        }
        _ => panic!("expected Merge"),
    }
}

#[test]
fn cli_parse_merge_with_path() {
    match parse(&["qsync", "merge", "", "subject", "maths", "--path", "/library"]) {
        CliCommand::Merge { path, query, .. } => {
            assert_eq!(path.as_deref(), Some("/library"));
            assert_eq!(query, "");
        }
        _ => panic!("expected Merge with --path"),
    }
}

#[test]
fn cli_parse_remove_many_keys() {
    match parse(&["qsync", "remove", "subject=a&page=2&q=x", "subject", "page"]) {
        CliCommand::Remove { query, keys, path } => {
            assert_eq!(query, "subject=a&page=2&q=x");
            assert_eq!(keys, vec!["subject", "page"]);
            assert!(path.is_none());
        }
        _ => panic!("expected Remove"),
    }
}

#[test]
fn cli_parse_remove_requires_key() {
    assert!(Cli::try_parse_from(["qsync", "remove", "page=2"]).is_err());
}

#[test]
fn cli_parse_subjects_and_config() {
    assert!(matches!(parse(&["qsync", "subjects"]), CliCommand::Subjects));
    assert!(matches!(parse(&["qsync", "config"]), CliCommand::Config));
}
