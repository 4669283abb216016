//! English messages shipped with the console.

pub(crate) const DEFAULT_MESSAGES: &str = r#"# Admin panel
msg.admin.name=Name
msg.admin.path=Path
msg.admin.add=Add
msg.admin.edit=Edit
msg.admin.remove=Remove
msg.admin.save=Save
msg.admin.cancel=Cancel

msg.admin.audio.list.title=Audio folders
msg.admin.audio.list.description=Folders scanned for music and other audio files.
msg.admin.audio.add.title=Add audio folder
msg.admin.audio.update.title=Edit audio folder
msg.admin.audio.remove.confirm=Remove this audio folder?

msg.admin.picture.list.title=Picture folders
msg.admin.picture.list.description=Folders scanned for photos and images.
msg.admin.picture.add.title=Add picture folder
msg.admin.picture.update.title=Edit picture folder
msg.admin.picture.remove.confirm=Remove this picture folder?

msg.admin.video.list.title=Video folders
msg.admin.video.list.description=Folders scanned for movies and other video files.
msg.admin.video.add.title=Add video folder
msg.admin.video.update.title=Edit video folder
msg.admin.video.remove.confirm=Remove this video folder?

# Standalone pages
msg.name=Label
msg.path=Path
msg.add=Add
msg.edit=Edit
msg.remove=Remove
msg.audio.title=Audio folders
msg.audio.remove.confirm=Remove this audio folder?
msg.picture.title=Picture folders
msg.picture.remove.confirm=Remove this picture folder?
"#;
