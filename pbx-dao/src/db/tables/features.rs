//! Feature names shared by the `extensions` and `feature_extension` tables

pub(super) const SERVICES: &[&str] = &[
    "enablevm",
    "vmusermsg",
    "vmuserpurge",
    "phonestatus",
    "recsnd",
    "calllistening",
    "directoryaccess",
    "fwdundoall",
    "pickup",
    "callrecord",
    "incallfilter",
    "enablednd",
    "paging",
    "bsfilter",
];

pub(super) const FORWARDS: &[&str] = &["fwdbusy", "fwdrna", "fwdunc"];

pub(super) const AGENT_ACTIONS: &[&str] =
    &["agentstaticlogin", "agentstaticlogoff", "agentstaticlogtoggle"];

pub(super) fn forward_name(feature: &str) -> Option<&'static str> {
    match feature {
        "fwdbusy" => Some("busy"),
        "fwdrna" => Some("noanswer"),
        "fwdunc" => Some("unconditional"),
        _ => None,
    }
}

pub(super) fn agent_action_name(feature: &str) -> Option<&'static str> {
    match feature {
        "agentstaticlogin" => Some("login"),
        "agentstaticlogoff" => Some("logout"),
        "agentstaticlogtoggle" => Some("toggle"),
        _ => None,
    }
}

/// Strip the `_` pattern marker and trailing `.` wildcards from a dialplan exten
pub(super) fn clean_exten(exten: &str) -> String {
    exten
        .strip_prefix('_')
        .unwrap_or(exten)
        .trim_end_matches('.')
        .to_string()
}

/// `?start, ?start+1, ...` for an IN clause
pub(super) fn placeholders(start: usize, count: usize) -> String {
    (start..start + count)
        .map(|i| format!("?{}", i))
        .collect::<Vec<_>>()
        .join(", ")
}
