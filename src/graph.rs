use crate::error::{Error, Result};
use crate::model::{Dataset, UserId};
use log::info;
use petgraph::algo::tarjan_scc;
use petgraph::dot::{Config, Dot};
use petgraph::graph::NodeIndex;
use petgraph::Graph;
use rayon::prelude::*;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Directed friendship graph: an edge `a -> b` means `b` is in `a`'s friend
/// list. Edge weights count repeated entries.
pub struct FriendGraph {
    pub graph: Graph<String, u32>,
    pub nodes: HashMap<UserId, NodeIndex>,
    pub labels: HashMap<NodeIndex, usize>,
}

impl FriendGraph {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut graph = Graph::new();
        let mut nodes = HashMap::new();

        for user in &dataset.users {
            let node = *nodes
                .entry(user.id.clone())
                .or_insert_with(|| graph.add_node(user.name.clone()));
            graph[node] = user.name.clone();
        }

        for user in &dataset.users {
            let from = nodes[&user.id];
            for friend in &user.friends {
                // friends without a record still get a node
                let to = *nodes
                    .entry(friend.clone())
                    .or_insert_with(|| graph.add_node(format!("#{}", friend)));
                if let Some(edge) = graph.find_edge(from, to) {
                    graph[edge] += 1;
                } else {
                    graph.add_edge(from, to, 1);
                }
            }
        }

        FriendGraph {
            graph,
            nodes,
            labels: HashMap::new(),
        }
    }

    pub fn detect_communities(&mut self) {
        let scc = tarjan_scc(&self.graph);

        self.labels = scc
            .into_par_iter()
            .enumerate()
            .flat_map(|(community_id, nodes)| {
                nodes
                    .into_iter()
                    .map(|node| (node, community_id))
                    .collect::<Vec<_>>()
            })
            .collect();
        info!(
            "found {} communities among {} nodes",
            self.communities().len(),
            self.graph.node_count()
        );
    }

    pub fn community_of(&self, user: &UserId) -> Option<usize> {
        self.nodes
            .get(user)
            .and_then(|node| self.labels.get(node))
            .copied()
    }

    // members are listed in node insertion order
    pub fn communities(&self) -> BTreeMap<usize, Vec<String>> {
        let mut communities = BTreeMap::new();
        for node in self.graph.node_indices() {
            if let Some(&community_id) = self.labels.get(&node) {
                communities
                    .entry(community_id)
                    .or_insert_with(Vec::new)
                    .push(self.graph[node].clone());
            }
        }
        communities
    }

    pub fn to_dot(&self) -> String {
        let node_attrs = |_, (node, name): (NodeIndex, &String)| {
            let community_id = self.labels.get(&node).copied().unwrap_or(0);
            let hue = (community_id * 60) % 360;
            format!(
                "label={:?}, style=filled, fillcolor=\"{:.3} 0.5 0.7\"",
                name,
                hue as f32 / 360.0
            )
        };
        let dot = Dot::with_attr_getters(
            &self.graph,
            &[Config::EdgeNoLabel, Config::NodeNoLabel],
            &|_, edge| format!("label=\"{}\"", edge.weight()),
            &node_attrs,
        );
        format!("{:?}", dot)
    }

    pub fn save_dot(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_dot()).map_err(|e| Error::io(path, e))?;
        info!("wrote friendship graph to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;

    fn dataset() -> Dataset {
        Dataset::new(
            vec![
                User::new(1, "A", &[2, 2], &[]),
                User::new(2, "B", &[1], &[]),
                User::new(3, "C", &[99], &[]),
            ],
            vec![],
        )
    }

    #[test]
    fn builds_nodes_for_users_and_dangling_friends() {
        let graph = FriendGraph::from_dataset(&dataset());
        assert_eq!(graph.graph.node_count(), 4);
        assert_eq!(graph.graph.edge_count(), 3);
        assert_eq!(graph.graph[graph.nodes[&UserId::from(99)]], "#99");
        let edge = graph
            .graph
            .find_edge(graph.nodes[&UserId::from(1)], graph.nodes[&UserId::from(2)])
            .unwrap();
        assert_eq!(graph.graph[edge], 2);
    }

    #[test]
    fn mutual_friends_share_a_community() {
        let mut graph = FriendGraph::from_dataset(&dataset());
        graph.detect_communities();
        let community = |id: i64| graph.community_of(&UserId::from(id));
        assert_eq!(community(1), community(2));
        assert_ne!(community(1), community(3));
        assert_eq!(graph.communities().len(), 3);
        assert_eq!(graph.community_of(&UserId::from(7)), None);
    }

    #[test]
    fn dot_output_carries_names() {
        let mut graph = FriendGraph::from_dataset(&dataset());
        graph.detect_communities();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.dot");
        graph.save_dot(&path).unwrap();
        let dot = std::fs::read_to_string(&path).unwrap();
        assert!(dot.starts_with("digraph"));
        assert!(dot.contains("label=\"A\""));
        assert!(dot.contains("label=\"#99\""));
    }

    #[test]
    fn dot_escapes_labels_and_colors_each_community() {
        let dataset = Dataset::new(
            vec![User {
                id: UserId::from("alice"),
                name: "Al \"the\" ice".to_string(),
                friends: vec![UserId::from("bob")],
                liked_pages: vec![],
            }],
            vec![],
        );
        let mut graph = FriendGraph::from_dataset(&dataset);
        graph.detect_communities();
        let dot = graph.to_dot();
        assert!(dot.contains(r#"label="Al \"the\" ice""#));
        assert!(dot.contains(r##"label="#\"bob\"""##));
        assert!(dot.contains("fillcolor=\"0.000 0.5 0.7\""));
        assert!(dot.contains("fillcolor=\"0.167 0.5 0.7\""));
    }
}
