//! Report dialog markup. Placeholder tokens are substituted verbatim with
//! localized strings before the fragment is parsed.

pub const TOKEN_TITLE: &str = "{{title}}";
pub const TOKEN_VIOLATION_LABEL: &str = "{{violation_label}}";
pub const TOKEN_VIOLATION_OPTIONS: &str = "{{violation_options}}";
pub const TOKEN_EMAIL_PLACEHOLDER: &str = "{{email_placeholder}}";
pub const TOKEN_INFO_PLACEHOLDER: &str = "{{info_placeholder}}";
pub const TOKEN_SUBMIT_LABEL: &str = "{{submit_label}}";
pub const TOKEN_ABOUT: &str = "{{about}}";
pub const TOKEN_ICON: &str = "{{icon}}";

pub const DIALOG_TEMPLATE: &str = concat!(
    "<style id=\"flagpost-report-style\">",
    "#flagpost-report-dialog{position:fixed;top:50%;left:50%;",
    "transform:translate(-50%,-50%);margin:0;max-width:28rem;width:90%;",
    "border:1px solid #c0c0c0;border-radius:8px;padding:1.25rem;",
    "font-family:system-ui,sans-serif;z-index:2147483647;}",
    "#flagpost-report-dialog .flagpost-header{display:flex;align-items:center;gap:0.5rem;}",
    "#flagpost-report-dialog .flagpost-icon svg{height:1.25rem;width:auto;vertical-align:middle;}",
    "#flagpost-report-dialog h2{margin:0;font-size:1.1rem;flex:1;}",
    "#flagpost-report-dialog .flagpost-close{border:none;background:none;",
    "font-size:1.25rem;cursor:pointer;line-height:1;}",
    "#flagpost-report-dialog label{display:block;margin-top:0.75rem;font-size:0.9rem;}",
    "#flagpost-report-dialog select,#flagpost-report-dialog input,",
    "#flagpost-report-dialog textarea{display:block;width:100%;margin-top:0.25rem;}",
    "#flagpost-report-dialog .flagpost-submit{margin-top:1rem;width:100%;}",
    "#flagpost-report-dialog .flagpost-about{margin-top:0.75rem;font-size:0.75rem;color:#666;}",
    "</style>",
    "<dialog id=\"flagpost-report-dialog\">",
    "<div class=\"flagpost-header\">",
    "<span class=\"flagpost-icon\">{{icon}}</span>",
    "<h2>{{title}}</h2>",
    "<button class=\"flagpost-close\" data-flagpost-close=\"true\" type=\"button\">&#215;</button>",
    "</div>",
    "<form method=\"dialog\">",
    "<label>{{violation_label}}",
    "<select name=\"violation\">{{violation_options}}</select>",
    "</label>",
    "<input type=\"email\" name=\"email\" placeholder=\"{{email_placeholder}}\">",
    "<textarea name=\"info\" rows=\"3\" placeholder=\"{{info_placeholder}}\"></textarea>",
    "<button class=\"flagpost-submit\" data-flagpost-submit=\"true\" type=\"submit\">{{submit_label}}</button>",
    "</form>",
    "<p class=\"flagpost-about\">{{about}}</p>",
    "</dialog>"
);
