//! Component catalog with construction-time validation
//!
//! The registry owns every component definition for the process lifetime and
//! is read-only after construction. Registration order is the presentation
//! order and the stable iteration order. Lookup is by exact name only.
//!
//! Construction fails on duplicate names, on a dependency naming an
//! unregistered component, and on a dependency cycle. These are configuration
//! errors fatal at startup, before any installation activity.

use std::collections::{HashMap, HashSet};

use crate::component::{
    Component, breezy::BreezyDesktop, depth3d::Depth3d, monado::Monado, opentrack::OpenTrack,
    stardust::StardustXr, vrto3d::VrTo3d, xr_driver::XrDriver,
};
use crate::error::{Result, VrstackError};

pub struct Registry {
    components: Vec<Box<dyn Component>>,
}

impl Registry {
    /// Build a registry from components, validating the catalog
    pub fn with_components(components: Vec<Box<dyn Component>>) -> Result<Self> {
        let registry = Self { components };
        registry.validate()?;
        Ok(registry)
    }

    /// The stock component catalog in registration order
    pub fn builtin() -> Result<Self> {
        Self::with_components(vec![
            Box::new(XrDriver::new()),
            Box::new(BreezyDesktop::new()),
            Box::new(Monado::new()),
            Box::new(OpenTrack::new()),
            Box::new(StardustXr::new()),
            Box::new(VrTo3d::new()),
            Box::new(Depth3d::new()),
        ])
    }

    /// Build without validation, for exercising resolver edge cases
    #[cfg(test)]
    pub fn unvalidated(components: Vec<Box<dyn Component>>) -> Self {
        Self { components }
    }

    fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        for component in &self.components {
            if !names.insert(component.spec().name) {
                return Err(VrstackError::DuplicateComponent {
                    name: component.spec().name.to_string(),
                });
            }
        }

        let mut deps: HashMap<&str, &[&str]> = HashMap::new();
        for component in &self.components {
            let spec = component.spec();
            for dep in spec.dependencies {
                if !names.contains(dep) {
                    return Err(VrstackError::UnknownDependency {
                        component: spec.name.to_string(),
                        dependency: (*dep).to_string(),
                    });
                }
            }
            deps.insert(spec.name, spec.dependencies);
        }

        self.check_cycles(&deps)
    }

    /// DFS cycle check: a node re-entered while still on the current path
    /// closes a cycle
    fn check_cycles(&self, deps: &HashMap<&str, &[&str]>) -> Result<()> {
        let mut done = HashSet::new();
        let mut path = Vec::new();

        for component in &self.components {
            Self::visit(component.spec().name, deps, &mut done, &mut path)?;
        }
        Ok(())
    }

    fn visit<'a>(
        name: &'a str,
        deps: &HashMap<&'a str, &'a [&'a str]>,
        done: &mut HashSet<&'a str>,
        path: &mut Vec<&'a str>,
    ) -> Result<()> {
        if done.contains(name) {
            return Ok(());
        }
        if path.contains(&name) {
            let mut chain: Vec<&str> = path.clone();
            chain.push(name);
            return Err(VrstackError::DependencyCycle {
                chain: chain.join(" -> "),
            });
        }

        path.push(name);
        if let Some(component_deps) = deps.get(name) {
            for dep in component_deps.iter().copied() {
                Self::visit(dep, deps, done, path)?;
            }
        }
        path.pop();
        done.insert(name);
        Ok(())
    }

    /// Look up a component by exact name
    pub fn get(&self, name: &str) -> Option<&dyn Component> {
        self.components
            .iter()
            .find(|c| c.spec().name == name)
            .map(|c| &**c)
    }

    /// All components in registration order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Component> {
        self.components.iter().map(|c| &**c)
    }

    /// Names of required components, in registration order
    pub fn required_names(&self) -> Vec<String> {
        self.iter()
            .filter(|c| c.spec().required)
            .map(|c| c.spec().name.to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
