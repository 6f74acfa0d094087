fn main() -> anyhow::Result<()> {
    claude_chat_viewer::cli::run()
}
