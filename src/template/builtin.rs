//! Templates shipped with the console.
//!
//! `folderList.html` backs the dialog variants and is the fragment the admin
//! panel fetched ahead of time; `folder_list_template` backs the inline
//! variants and used to live inside the page itself.

/// Name of the dialog-flow folder list template.
pub const FOLDER_LIST_DIALOG: &str = "folderList.html";

/// Name of the inline-flow folder list template.
pub const FOLDER_LIST_INLINE: &str = "folder_list_template";

pub(crate) const FOLDER_LIST_DIALOG_HTML: &str = r##"<div class="page-header">
  <h3>{{#icon}}<i class="icon-{{icon}}"></i> {{/icon}}{{title}}</h3>
  {{#description}}<p class="muted">{{description}}</p>{{/description}}
</div>
<table class="table table-hover folder-list">
  <thead>
    <tr>
      <th>{{nameLabel}}</th>
      <th>{{pathLabel}}</th>
      <th><a href="#" class="btn btn-small {{dialogId}}AddOpen" title="{{addLabel}}"><i class="icon-plus"></i> {{addLabel}}</a></th>
    </tr>
  </thead>
  <tbody>
{{#folders}}    <tr class="{{dialogId}}EditOpen" data-id="{{id}}">
      <td>{{name}}</td>
      <td>{{path}}</td>
      <td>
        <a href="#" class="{{dialogId}}EditOpen" data-id="{{id}}" title="{{editLabel}}"><i class="icon-pencil"></i></a>
        <a href="#" class="{{removeTarget}}" data-id="{{id}}" title="{{removeLabel}}"><i class="icon-trash"></i></a>
      </td>
    </tr>
{{/folders}}  </tbody>
</table>
<div id="{{dialogId}}" class="modal hide fade" tabindex="-1">
  <div class="modal-header"><h3 id="{{dialogId}}Header"></h3></div>
  <div class="modal-body">
    <input type="hidden" id="folderId">
    <label for="folderName">{{nameLabel}}</label>
    <input type="text" id="folderName">
    <label for="folderPath">{{pathLabel}}</label>
    <input type="text" id="folderPath">
    {{#browsable}}<a href="#" class="btn {{dialogId}}Browse"><i class="icon-folder-open"></i></a>{{/browsable}}
    <div id="messagebox"></div>
  </div>
  <div class="modal-footer">
    <a href="#" class="btn {{dialogId}}Close">{{cancelLabel}}</a>
    <a href="#" class="btn btn-primary {{dialogId}}Save">{{saveLabel}}</a>
  </div>
</div>
"##;

pub(crate) const FOLDER_LIST_INLINE_HTML: &str = r##"<h3>{{title}}</h3>
<table class="folder-list">
  <tr><th>{{nameLabel}}</th><th>{{pathLabel}}</th><th></th></tr>
{{#folders}}  <tr>
    <td>{{name}}</td>
    <td>{{path}}</td>
    <td>
      <a href="#" class="{{editTarget}}" data-id="{{id}}">{{editLabel}}</a>
      <a href="#" class="{{removeTarget}}" data-id="{{id}}" data-confirm="{{removeConfirm}}">{{removeLabel}}</a>
    </td>
  </tr>
{{/folders}}</table>
<input type="hidden" name="folderId">
<input type="text" name="folderLabel" placeholder="{{nameLabel}}">
<input type="text" name="folderPath" placeholder="{{pathLabel}}">
<button id="{{addTarget}}">{{addLabel}}</button>
<div id="messagebox"></div>
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::Template;
    use serde_json::json;

    #[test]
    fn test_each_builtin_parses_and_keeps_anchor_hrefs() {
        for (name, source) in [
            (FOLDER_LIST_DIALOG, FOLDER_LIST_DIALOG_HTML),
            (FOLDER_LIST_INLINE, FOLDER_LIST_INLINE_HTML),
        ] {
            let template = Template::parse(name, source).unwrap();
            let html = template.render(&json!({
                "folders": [{"id": "1", "name": "Music", "path": "/mnt/music"}]
            }));
            assert!(html.contains(r##"href="#""##), "{}", name);
            assert!(html.trim_end().ends_with("</div>"), "{}", name);
        }
    }
}
