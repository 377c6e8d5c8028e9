// ABOUTME: Driver state wrapping a grid and its configuration.
// ABOUTME: Executes commands against the focused pane and renders the layout.

use anyhow::Result;
use pgrid_core::GridConfig;
use pgrid_layout::{Grid, PaneId, Removal, ViewClosed};
use serde::Serialize;

use crate::commands::Command;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Snapshot {
    pub extent: u32,
    pub focused: Option<u64>,
    pub panes: Vec<PaneSnapshot>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PaneSnapshot {
    pub id: u64,
    pub start: u32,
    pub len: u32,
    pub views: Vec<ViewSnapshot>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub id: u64,
    pub document: u64,
    pub active: bool,
}

pub struct App {
    grid: Grid,
    config: GridConfig,
}

impl App {
    pub fn new(config: GridConfig) -> Self {
        Self {
            grid: Grid::from_config(&config),
            config,
        }
    }

    /// Pane commands act on: the focused one, or the first
    fn current_pane(&self) -> PaneId {
        self.grid.last_focus().unwrap_or_else(|| self.grid.first_pane())
    }

    pub fn execute(&mut self, command: Command) -> Result<()> {
        let pane = self.current_pane();

        match command {
            Command::Open(document) => {
                let (pane, view) = self.grid.focus_document(document);
                tracing::info!("Opened {:?} as {:?} in {:?}", document, view, pane);
            }
            Command::Close => {
                let Some(view) = self.grid.pane(pane)?.active_view() else {
                    tracing::warn!("Nothing to close in {:?}", pane);
                    return Ok(());
                };
                let closed = self.grid.close_view(pane, view)?;
                if closed == ViewClosed::Empty && self.config.collapse_empty_panes {
                    self.grid.collapse_empty_pane(pane)?;
                }
            }
            Command::Split(action) => {
                let Some(view) = self.grid.pane(pane)?.active_view() else {
                    tracing::warn!("No view to split in {:?}", pane);
                    return Ok(());
                };
                let outcome = self.grid.split_view(pane, view, action)?;
                if outcome.source == Some(ViewClosed::Empty) && self.config.collapse_empty_panes {
                    self.grid.collapse_empty_pane(pane)?;
                    // Collapsing hands focus to the source's left neighbor.
                    self.grid.notify_focus(outcome.pane);
                }
            }
            Command::Focus(direction) => {
                self.grid.notify_focus(pane);
                self.grid.focus_neighbor_from_last(direction);
            }
            Command::InsertBefore => {
                let new_pane = self.grid.insert_before(pane)?;
                self.grid.notify_focus(new_pane);
            }
            Command::InsertAfter => {
                let new_pane = self.grid.insert_after(pane)?;
                self.grid.notify_focus(new_pane);
            }
            Command::Remove => {
                if self.grid.remove_pane(pane)? == Removal::Refused {
                    tracing::warn!("Refusing to remove the only pane");
                }
            }
            Command::Resize(extent) => {
                self.grid.resize(extent);
                if self.config.reflow_on_resize {
                    self.grid.reflow();
                }
            }
            Command::Reflow => self.grid.reflow(),
            Command::Show => {}
        }

        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        let panes = self
            .grid
            .pane_spans()
            .into_iter()
            .filter_map(|(id, span)| {
                let pane = self.grid.pane(id).ok()?;
                let views = pane
                    .views()
                    .filter_map(|view| {
                        Some(ViewSnapshot {
                            id: view.0,
                            document: pane.document_of(view)?.0,
                            active: pane.active_view() == Some(view),
                        })
                    })
                    .collect();
                Some(PaneSnapshot {
                    id: id.0,
                    start: span.start,
                    len: span.len,
                    views,
                })
            })
            .collect();

        Snapshot {
            extent: self.grid.extent(),
            focused: self.grid.last_focus().map(|p| p.0),
            panes,
        }
    }

    /// One line per pane: focus marker, pixel span, then documents with the
    /// active one starred
    pub fn render(&self) -> String {
        let snapshot = self.snapshot();
        let mut out = String::new();
        for pane in &snapshot.panes {
            let marker = if snapshot.focused == Some(pane.id) { '>' } else { ' ' };
            let docs: Vec<String> = pane
                .views
                .iter()
                .map(|v| {
                    if v.active {
                        format!("*{}", v.document)
                    } else {
                        v.document.to_string()
                    }
                })
                .collect();
            out.push_str(&format!(
                "{} pane {} [{}+{}] {}\n",
                marker,
                pane.id,
                pane.start,
                pane.len,
                docs.join(" ")
            ));
        }
        out
    }
}
