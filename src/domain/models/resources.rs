//! Static emergency-resources directory, reachable at any time from the
//! main session. Never touches persisted state.

/// How a resource is contacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Call,
    WhatsApp,
}

#[derive(Debug, Clone)]
pub struct Resource {
    pub name: &'static str,
    pub kind: ContactKind,
    pub contact: &'static str,
    pub info: &'static str,
}

#[derive(Debug, Clone)]
pub struct ResourceCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub resources: &'static [Resource],
}

pub static EMERGENCY_RESOURCES: [ResourceCategory; 5] = [
    ResourceCategory {
        id: "mental_health",
        title: "Hablar con alguien",
        description: "Recursos de salud mental disponibles 24/7.",
        resources: &[
            Resource {
                name: "Línea 113 (Opción 5)",
                kind: ContactKind::Call,
                contact: "113",
                info: "Línea de ayuda del MINSA.",
            },
            Resource {
                name: "WhatsApp/Telegram",
                kind: ContactKind::WhatsApp,
                contact: "51955557000",
                info: "Chatea con un especialista.",
            },
            Resource {
                name: "WhatsApp/Telegram 2",
                kind: ContactKind::WhatsApp,
                contact: "51952842623",
                info: "Soporte adicional.",
            },
        ],
    },
    ResourceCategory {
        id: "medical",
        title: "Emergencia Médica",
        description: "Asistencia médica y ambulancias.",
        resources: &[Resource {
            name: "SAMU",
            kind: ContactKind::Call,
            contact: "106",
            info: "Servicio de Atención Móvil de Urgencia.",
        }],
    },
    ResourceCategory {
        id: "violence",
        title: "Violencia Doméstica/Sexual",
        description: "Líneas de ayuda para víctimas de violencia.",
        resources: &[Resource {
            name: "Línea 100",
            kind: ContactKind::Call,
            contact: "100",
            info: "Programa Nacional Aurora.",
        }],
    },
    ResourceCategory {
        id: "police",
        title: "Policía Nacional",
        description: "Para emergencias que requieren intervención policial.",
        resources: &[Resource {
            name: "Emergencias Policiales",
            kind: ContactKind::Call,
            contact: "105",
            info: "Central de emergencias.",
        }],
    },
    ResourceCategory {
        id: "firefighters",
        title: "Bomberos",
        description: "Para incendios, rescates y otras emergencias.",
        resources: &[Resource {
            name: "Bomberos Voluntarios",
            kind: ContactKind::Call,
            contact: "116",
            info: "Central de emergencias de bomberos.",
        }],
    },
];
