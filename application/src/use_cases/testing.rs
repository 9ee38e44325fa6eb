//! Scripted in-memory gateway shared by the use case tests.

use crate::ports::lineage_gateway::{GatewayError, LineageGateway};
use async_trait::async_trait;
use council_domain::Lineage;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

/// A scripted answer for one call
#[derive(Debug, Clone)]
pub(crate) enum Script {
    /// Answer immediately
    Text(String),
    /// Fail immediately
    Error(String),
    /// Answer after the given (tokio) delay
    Delayed(Duration, String),
}

impl Script {
    pub(crate) fn text(text: &str) -> Self {
        Script::Text(text.to_string())
    }

    async fn play(self) -> Result<String, GatewayError> {
        match self {
            Script::Text(t) => Ok(t),
            Script::Error(e) => Err(GatewayError::Other(e)),
            Script::Delayed(delay, t) => {
                tokio::time::sleep(delay).await;
                Ok(t)
            }
        }
    }
}

/// Mock gateway that plays per-lineage scripts in call order
pub(crate) struct ScriptedGateway {
    scripts: Mutex<HashMap<Lineage, VecDeque<Script>>>,
    /// Script used for every call once a lineage's queue is empty
    fallback: Mutex<HashMap<Lineage, Script>>,
    synthesis: Mutex<Option<Script>>,
    /// (lineage, system, prompt) of every consult call, in call order
    calls: Mutex<Vec<(Lineage, String, String)>>,
    synthesis_calls: Mutex<Vec<String>>,
}

impl ScriptedGateway {
    pub(crate) fn new() -> Self {
        Self {
            scripts: Mutex::new(HashMap::new()),
            fallback: Mutex::new(HashMap::new()),
            synthesis: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
            synthesis_calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue scripts for one lineage
    pub(crate) fn with(self, lineage: Lineage, scripts: Vec<Script>) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .entry(lineage)
            .or_default()
            .extend(scripts);
        self
    }

    /// Play `script` for every call to `lineage` not otherwise queued
    pub(crate) fn always(self, lineage: Lineage, script: Script) -> Self {
        self.fallback.lock().unwrap().insert(lineage, script);
        self
    }

    /// Play `script` for every call to every lineage
    pub(crate) fn all_always(self, script: Script) -> Self {
        Lineage::ALL
            .into_iter()
            .fold(self, |gw, lineage| gw.always(lineage, script.clone()))
    }

    pub(crate) fn with_synthesis(self, script: Script) -> Self {
        *self.synthesis.lock().unwrap() = Some(script);
        self
    }

    fn next_script(&self, lineage: Lineage) -> Script {
        if let Some(script) = self
            .scripts
            .lock()
            .unwrap()
            .get_mut(&lineage)
            .and_then(|q| q.pop_front())
        {
            return script;
        }
        self.fallback
            .lock()
            .unwrap()
            .get(&lineage)
            .cloned()
            .unwrap_or_else(|| Script::Text(format!("{} default answer", lineage)))
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub(crate) fn prompts_for(&self, lineage: Lineage) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _, _)| *l == lineage)
            .map(|(_, _, p)| p.clone())
            .collect()
    }

    pub(crate) fn systems_for(&self, lineage: Lineage) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _, _)| *l == lineage)
            .map(|(_, s, _)| s.clone())
            .collect()
    }

    pub(crate) fn synthesis_prompts(&self) -> Vec<String> {
        self.synthesis_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LineageGateway for ScriptedGateway {
    async fn consult(
        &self,
        lineage: Lineage,
        system: &str,
        prompt: &str,
    ) -> Result<String, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push((lineage, system.to_string(), prompt.to_string()));
        let script = self.next_script(lineage);
        script.play().await
    }

    async fn synthesize(&self, _system: &str, prompt: &str) -> Result<String, GatewayError> {
        self.synthesis_calls.lock().unwrap().push(prompt.to_string());
        let script = self
            .synthesis
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Script::text("Unified verdict."));
        script.play().await
    }
}
