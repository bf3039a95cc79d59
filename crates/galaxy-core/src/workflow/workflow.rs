//! Workflow: wrapper raíz que posee la secuencia ordenada de steps.
//!
//! Además del record, un workflow recuerda su identidad en el servidor
//! (`id`) y el mapa `label -> nodo` de sus conexiones (`links`). Cualquier
//! mutación, propia o subida desde un step, olvida ambos: un workflow editado
//! localmente ya no es idéntico a ninguno del servidor.
use crate::config::{FingerprintAlgorithm, CONFIG};
use crate::constants::fields::{FORMAT_VERSION, LINK_LABEL, STEPS};
use crate::constants::KNOWN_FORMAT_VERSIONS;
use crate::errors::{WrapperError, WrapperResult};
use crate::model::{as_record, Fingerprint, FromRecord, Record, Tracked, Wrapper};
use crate::workflow::step::{Step, StepHost};
use crate::workflow::tool::{Tool, ToolMut};
use indexmap::IndexMap;
use log::{debug, warn};
use serde_json::Value;
use std::hash::{Hash, Hasher};

/// `label` de conexión -> id del nodo de origen.
pub type Links = IndexMap<String, String>;

#[derive(Debug)]
pub struct Workflow {
    inner: Wrapper,
    steps: Vec<Step>,
    id: Option<String>,
    links: Option<Links>,
}

impl Workflow {
    /// `links` llega como `{node_id: {"label": .., ..}}`. Sin `id` el
    /// workflow nace modificado (y por tanto sin `links`).
    pub fn new(record: &Record, id: Option<String>, links: Option<&Record>) -> WrapperResult<Self> {
        Self::with_algorithm(record, id, links, CONFIG.fingerprint_algorithm)
    }

    pub fn with_algorithm(
        record: &Record,
        id: Option<String>,
        links: Option<&Record>,
        algorithm: FingerprintAlgorithm,
    ) -> WrapperResult<Self> {
        let inner = Wrapper::with_algorithm(record, algorithm);
        let steps = materialize_steps(inner.get(STEPS)?, algorithm)?;
        let links = links.map(normalize_links).transpose()?;
        let mut wf = Workflow { inner, steps, id, links };
        if let Some(version) = wf.format_version() {
            if !KNOWN_FORMAT_VERSIONS.contains(&version) {
                warn!("workflow format-version {version} is not one of {KNOWN_FORMAT_VERSIONS:?}");
            }
        }
        if wf.id.is_none() {
            wf.touch();
        }
        Ok(wf)
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn links(&self) -> Option<&Links> {
        self.links.as_ref()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn step_mut(&mut self, index: usize) -> WrapperResult<StepMut<'_>> {
        if index >= self.steps.len() {
            return Err(WrapperError::NoSuchStep(index));
        }
        Ok(StepMut { workflow: self, index })
    }

    pub fn format_version(&self) -> Option<&str> {
        self.inner.record().get(FORMAT_VERSION).and_then(Value::as_str)
    }

    pub fn has_known_format(&self) -> bool {
        self.format_version().is_some_and(|v| KNOWN_FORMAT_VERSIONS.contains(&v))
    }

    /// Copia profunda y desconectada del servidor, lista para editar antes
    /// de volver a subirla.
    pub fn detached_clone(&self) -> Workflow {
        let mut wf = Workflow {
            inner: Wrapper::with_algorithm(self.inner.record(), self.inner.algorithm()),
            steps: self.steps.iter().map(Step::fresh_copy).collect(),
            id: None,
            links: None,
        };
        wf.touch();
        wf
    }

    /// Copia el record del step `index` dentro de `steps` y toca el workflow.
    pub(crate) fn step_touched(&mut self, index: usize) {
        let step_record = Value::Object(self.steps[index].record().clone());
        if let Some(Value::Object(raw_steps)) = self.inner.record_mut().get_mut(STEPS) {
            raw_steps.insert(index.to_string(), step_record);
        }
        self.touch();
    }

    fn detach(&mut self) {
        if let Some(id) = self.id.take() {
            debug!("workflow {id} modified locally, forgetting server identity");
        }
        self.links = None;
    }
}

crate::record_accessors!(Workflow {
    name: String => "name",
});

fn materialize_steps(value: &Value, algorithm: FingerprintAlgorithm) -> WrapperResult<Vec<Step>> {
    let raw = as_record(value, "workflow steps")?;
    let mut steps = Vec::with_capacity(raw.len());
    for index in 0..raw.len() {
        let key = index.to_string();
        let step = raw.get(&key).ok_or_else(|| {
            WrapperError::MalformedInput(format!(
                "workflow steps must be keyed \"0\"..\"{}\", missing \"{key}\"",
                raw.len() - 1
            ))
        })?;
        steps.push(Step::owned(as_record(step, "workflow step")?, index, algorithm)?);
    }
    debug!("materialized {} workflow steps", steps.len());
    Ok(steps)
}

fn normalize_links(raw: &Record) -> WrapperResult<Links> {
    raw.iter()
        .map(|(node, descriptor)| {
            descriptor
                .get(LINK_LABEL)
                .and_then(Value::as_str)
                .map(|label| (label.to_string(), node.clone()))
                .ok_or_else(|| {
                    WrapperError::MalformedInput(format!("link from node {node} has no label"))
                })
        })
        .collect()
}

impl Tracked for Workflow {
    fn wrapper(&self) -> &Wrapper {
        &self.inner
    }

    /// Reemplazar `steps` vuelve a materializar la secuencia; se valida
    /// antes de escribir nada.
    fn set(&mut self, name: &str, value: Value) -> WrapperResult<()> {
        if name == STEPS && self.inner.has_field(name) {
            let steps = materialize_steps(&value, self.inner.algorithm())?;
            self.inner.set(name, value)?;
            self.steps = steps;
        } else {
            self.inner.set(name, value)?;
        }
        self.detach();
        Ok(())
    }

    fn touch(&mut self) {
        self.inner.touch();
        self.detach();
    }
}

impl FromRecord for Workflow {
    fn from_record(record: &Record) -> WrapperResult<Self> {
        Workflow::new(record, None, None)
    }
}

impl PartialEq for Workflow {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.fingerprint() == other.fingerprint()
    }
}

impl Eq for Workflow {}

impl Hash for Workflow {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Fingerprint::hash(self.fingerprint(), state)
    }
}

/// Handle mutable sobre un step de un workflow; cada escritura se copia al
/// record del workflow y lo toca.
pub struct StepMut<'a> {
    workflow: &'a mut Workflow,
    index: usize,
}

impl StepMut<'_> {
    pub fn step(&self) -> &Step {
        &self.workflow.steps[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn get(&self, name: &str) -> WrapperResult<&Value> {
        self.step().get(name)
    }

    pub fn set(&mut self, name: &str, value: Value) -> WrapperResult<()> {
        self.workflow.steps[self.index].set(name, value)?;
        self.workflow.step_touched(self.index);
        Ok(())
    }

    pub fn tool(&self) -> WrapperResult<Tool<'_>> {
        self.step().tool()
    }

    pub fn tool_mut(&mut self) -> WrapperResult<ToolMut<'_, Self>> {
        self.step().ensure_tool()?;
        Ok(ToolMut::new(self))
    }
}

impl StepHost for StepMut<'_> {
    fn host_step(&self) -> &Step {
        self.step()
    }

    fn host_step_mut(&mut self) -> &mut Step {
        &mut self.workflow.steps[self.index]
    }

    fn step_touched(&mut self) {
        self.workflow.step_touched(self.index);
    }
}
