//! # Dispatch
//!
//! Runs planned tool calls one at a time through a [`ToolSession`], printing
//! every result as it arrives. A failing call is reported and skipped; the
//! remaining calls still run.

use anyhow::Result;
use std::io::Write;

use crate::domain::traits::ToolSession;
use crate::domain::types::{ToolCall, ToolInfo};
use crate::strings::{logs, messages};

/// Counts reported after a dispatch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchSummary {
    pub completed: usize,
    pub failed: usize,
}

/// Print the tools the server advertises.
pub fn print_tools<W: Write>(out: &mut W, tools: &[ToolInfo]) -> Result<()> {
    writeln!(out, "{}", messages::AVAILABLE_TOOLS)?;
    for tool in tools {
        writeln!(
            out,
            "{}",
            messages::available_tool(&tool.name, tool.description.as_deref().unwrap_or(""))
        )?;
    }
    Ok(())
}

/// Print the plan as `{"tool_calls": [...]}`.
pub fn print_plan<W: Write>(out: &mut W, calls: &[ToolCall]) -> Result<()> {
    let plan = serde_json::json!({ "tool_calls": calls });
    writeln!(out, "{}", messages::PLANNED_ACTIONS)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&plan)?)?;
    Ok(())
}

/// Execute `calls` in order. Only a failure to write to `out` aborts the run.
pub async fn dispatch<S, W>(session: &S, calls: &[ToolCall], out: &mut W) -> Result<DispatchSummary>
where
    S: ToolSession + ?Sized,
    W: Write,
{
    let mut summary = DispatchSummary::default();

    for call in calls {
        writeln!(out, "{}", messages::executing_tool(call.tool.as_str()))?;
        writeln!(
            out,
            "{}",
            messages::tool_arguments(&serde_json::to_string(&call.arguments)?)
        )?;

        match session.call_tool(call).await {
            Ok(reply) => {
                if reply.texts.is_empty() {
                    writeln!(out, "{}", messages::NO_RESULT)?;
                }
                for text in &reply.texts {
                    writeln!(out, "{}", messages::tool_result(text))?;
                }
                summary.completed += 1;
            }
            Err(e) => {
                tracing::error!("{}", logs::tool_call_failed(call.tool.as_str(), &format!("{e:#}")));
                writeln!(out, "{}", messages::tool_call_error(&format!("{e:#}")))?;
                summary.failed += 1;
            }
        }
    }

    tracing::info!("{}", logs::dispatch_finished(summary.completed, summary.failed));
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{ToolName, ToolReply};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records calls; `create_file` fails like a broken channel would.
    #[derive(Default)]
    struct FakeSession {
        seen: Mutex<Vec<ToolName>>,
    }

    #[async_trait]
    impl ToolSession for FakeSession {
        async fn list_tools(&self) -> Result<Vec<ToolInfo>> {
            Ok(vec![ToolInfo {
                name: "list_files".to_string(),
                description: Some("List all files in the current folder".to_string()),
            }])
        }

        async fn call_tool(&self, call: &ToolCall) -> Result<ToolReply> {
            self.seen.lock().unwrap().push(call.tool);
            match call.tool {
                ToolName::ListFiles => Ok(ToolReply {
                    texts: vec!["No files found".to_string()],
                    is_error: false,
                }),
                ToolName::CreateFile => Err(anyhow::anyhow!("connection closed")),
            }
        }
    }

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[tokio::test]
    async fn test_empty_plan_dispatches_nothing() {
        let session = FakeSession::default();
        let mut buf = Vec::new();
        let summary = dispatch(&session, &[], &mut buf).await.unwrap();
        assert_eq!(summary, DispatchSummary::default());
        assert!(buf.is_empty());
        assert!(session.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failure_does_not_stop_remaining_calls() {
        let session = FakeSession::default();
        let calls = vec![
            ToolCall::create_file("a.txt", "x"),
            ToolCall::list_files(),
        ];
        let mut buf = Vec::new();
        let summary = dispatch(&session, &calls, &mut buf).await.unwrap();

        assert_eq!(summary, DispatchSummary { completed: 1, failed: 1 });
        assert_eq!(
            *session.seen.lock().unwrap(),
            vec![ToolName::CreateFile, ToolName::ListFiles]
        );

        let text = output(buf);
        assert!(text.contains("Executing tool: create_file"));
        assert!(text.contains(r#"Arguments: {"content":"x","filename":"a.txt"}"#));
        assert!(text.contains("Error executing tool: connection closed"));
        assert!(text.contains("Result: No files found"));
        assert!(text.find("Error executing").unwrap() < text.find("Result:").unwrap());
    }

    #[tokio::test]
    async fn test_empty_reply_prints_no_result() {
        struct Silent;

        #[async_trait]
        impl ToolSession for Silent {
            async fn list_tools(&self) -> Result<Vec<ToolInfo>> {
                Ok(Vec::new())
            }
            async fn call_tool(&self, _call: &ToolCall) -> Result<ToolReply> {
                Ok(ToolReply {
                    texts: Vec::new(),
                    is_error: false,
                })
            }
        }

        let mut buf = Vec::new();
        dispatch(&Silent, &[ToolCall::list_files()], &mut buf).await.unwrap();
        assert!(output(buf).contains("No result"));
    }

    #[tokio::test]
    async fn test_print_tools_and_plan() {
        let session = FakeSession::default();
        let tools = session.list_tools().await.unwrap();

        let mut buf = Vec::new();
        print_tools(&mut buf, &tools).unwrap();
        print_plan(&mut buf, &[ToolCall::list_files()]).unwrap();

        let text = output(buf);
        assert!(text.contains("  - list_files: List all files in the current folder"));
        assert!(text.contains("\"tool_calls\""));
        assert!(text.contains("\"tool\": \"list_files\""));
    }
}
