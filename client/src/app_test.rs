use super::*;

#[test]
fn launcher_paths_select_launcher() {
    assert_eq!(ShellView::from_path("/launcher.html"), ShellView::Launcher);
    assert_eq!(ShellView::from_path("/launcher"), ShellView::Launcher);
    assert_eq!(ShellView::from_path("/launcher/"), ShellView::Launcher);
}

#[test]
fn other_paths_select_chat() {
    for path in ["/", "", "/index.html", "/launcher.htm", "/chat/launcher"] {
        assert_eq!(ShellView::from_path(path), ShellView::Chat, "path {path:?}");
    }
}
