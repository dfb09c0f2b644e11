use std::collections::HashSet;

/// Built-in command names. The list carries a few duplicates; [`Vocabulary`]
/// drops them while keeping first-seen order.
pub const BUILTIN_COMMANDS: &[&str] = &[
    "sudo", "apt", "apt-get", "dnf", "yum", "brew", "docker", "docker-compose",
    "mysql", "mysql_secure_installation", "systemctl", "service", "cd", "ls",
    "pwd", "mkdir", "rm", "cp", "mv", "cat", "echo", "grep", "find", "sed",
    "awk", "tar", "gzip", "gunzip", "chmod", "chown", "chgrp", "ln", "mv",
    "ps", "kill", "top", "df", "du", "free", "uptime", "uname", "whoami",
    "hostname", "date", "cal", "ping", "wget", "curl", "git", "vim", "nano",
    "less", "more", "head", "tail", "sort", "uniq", "wc", "tr", "cut",
    "paste", "split", "tee", "xargs", "ssh", "scp", "rsync", "nc", "netstat",
    "ifconfig", "ip", "route", "ping", "traceroute", "nslookup", "dig",
    "mount", "umount", "fdisk", "mkfs", "df", "du", "free", "top", "ps",
    "kill", "killall", "pkill", "nice", "renice", "nohup", "bg", "fg", "jobs",
    "export", "unset", "env", "set", "alias", "unalias", "source", ".",
    "history", "type", "which", "whereis", "man", "info", "help", "exit",
    "logout", "clear", "reset", "stty", "tput", "echo", "printf", "read",
    "exec", "eval", "shift", "getopts", "trap", "wait", "sleep", "true",
    "false", "test", "[", "]", "let", "declare", "typeset", "local", "readonly",
    "export", "unset", "shift", "source", "exec",
];

/// The set of command names recognized inside shell blocks.
///
/// Names are deduplicated and ordered longest first, ties keeping their
/// original order, so `docker-compose` is always tried before `docker`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    names: Vec<String>,
}

impl Vocabulary {
    pub fn builtin() -> Self {
        Self::from_names(BUILTIN_COMMANDS.iter().copied())
    }

    /// Build a vocabulary from names in priority order. Empty names are ignored.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut names: Vec<String> = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty() && seen.insert(name.clone()))
            .collect();
        // sort_by is stable, so equal lengths keep their original order.
        names.sort_by(|a, b| b.len().cmp(&a.len()));
        Vocabulary { names }
    }

    /// The built-in names followed by `extra`.
    pub fn with_extra<S: AsRef<str>>(extra: &[S]) -> Self {
        Self::from_names(
            BUILTIN_COMMANDS
                .iter()
                .copied()
                .chain(extra.iter().map(|name| name.as_ref())),
        )
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Names in lookup order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// The longest name that `text` starts with and that ends at whitespace
    /// or at the end of `text`.
    pub fn match_prefix(&self, text: &str) -> Option<&str> {
        self.names().find(|name| {
            text.strip_prefix(name)
                .is_some_and(|rest| rest.chars().next().is_none_or(char::is_whitespace))
        })
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}
