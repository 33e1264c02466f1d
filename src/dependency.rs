//! 파생 물리량의 수식에서 참조 기호를 찾아 의존성 그래프를 만든다.

use std::collections::{BTreeMap, BTreeSet};

use crate::expr::{self, lexer};
use crate::registry::QuantityRegistry;

/// `파생 기호 → 참조 기호 집합`. 입력 물리량은 빈 집합을 가진다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    edges: BTreeMap<String, BTreeSet<String>>,
}

impl DependencyGraph {
    /// 수식의 식별자 중 내장 함수/상수가 아니고 등록된 기호인 것만 의존성으로 잡는다.
    /// 내장 이름과 같은 기호는 의존성이 아니다.
    pub fn build(registry: &QuantityRegistry) -> Self {
        let edges = registry
            .iter()
            .map(|q| {
                let deps: BTreeSet<String> = q
                    .expression()
                    .map(|expression| {
                        lexer::identifiers(expression)
                            .into_iter()
                            .filter(|ident| !expr::is_builtin(ident) && registry.contains(ident))
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default();
                (q.symbol().to_string(), deps)
            })
            .collect();
        Self { edges }
    }

    pub fn dependencies(&self, symbol: &str) -> impl Iterator<Item = &str> {
        self.edges
            .get(symbol)
            .into_iter()
            .flat_map(|deps| deps.iter().map(String::as_str))
    }

    pub fn as_map(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.edges
    }

    pub fn into_map(self) -> BTreeMap<String, BTreeSet<String>> {
        self.edges
    }

    /// `start`에서 도달 가능한 순환 하나를 `[a, b, ..., a]` 형태로 돌려준다.
    pub fn find_cycle(&self, start: &str) -> Option<Vec<String>> {
        let mut path: Vec<&str> = Vec::new();
        let mut done: BTreeSet<&str> = BTreeSet::new();
        self.visit(start, &mut path, &mut done)
    }

    fn visit<'a>(
        &'a self,
        node: &'a str,
        path: &mut Vec<&'a str>,
        done: &mut BTreeSet<&'a str>,
    ) -> Option<Vec<String>> {
        if let Some(pos) = path.iter().position(|n| *n == node) {
            let mut cycle: Vec<String> = path[pos..].iter().map(|s| s.to_string()).collect();
            cycle.push(node.to_string());
            return Some(cycle);
        }
        if done.contains(node) {
            return None;
        }
        path.push(node);
        for dep in self.dependencies(node) {
            if let Some(cycle) = self.visit(dep, path, done) {
                return Some(cycle);
            }
        }
        path.pop();
        done.insert(node);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::QuantityDefinition;

    fn registry(defs: &[(&str, Option<&str>)]) -> QuantityRegistry {
        QuantityRegistry::load(
            defs.iter()
                .map(|(sym, expression)| match expression {
                    Some(e) => QuantityDefinition::derived(sym, "900", e, "", "ul"),
                    None => QuantityDefinition::input(sym, "900", 1.0, "", 1.0, "ul"),
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn builtins_and_unknown_names_are_not_dependencies() {
        let reg = registry(&[("a", None), ("pi", None), ("b", Some("sqrt(a) * pi + zz"))]);
        let graph = DependencyGraph::build(&reg);
        assert_eq!(graph.dependencies("b").collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(graph.dependencies("a").count(), 0);
    }

    #[test]
    fn finds_cycles_reachable_from_start() {
        let reg = registry(&[("a", Some("b + 1")), ("b", Some("c")), ("c", Some("a")), ("d", Some("a"))]);
        let graph = DependencyGraph::build(&reg);
        assert_eq!(
            graph.find_cycle("a"),
            Some(vec!["a".into(), "b".into(), "c".into(), "a".into()])
        );
        let from_d = graph.find_cycle("d").unwrap();
        assert_eq!(from_d.first(), Some(&"a".to_string()));
        let acyclic = registry(&[("x", None), ("y", Some("x * 2"))]);
        assert_eq!(DependencyGraph::build(&acyclic).find_cycle("y"), None);
    }
}
