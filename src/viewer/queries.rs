use crate::model::{Course, Lesson};

impl Course {
    /// Aulas na ordem de navegação: módulo a módulo, aula a aula.
    pub fn lessons(&self) -> impl Iterator<Item = &Lesson> {
        self.modules.iter().flat_map(|m| m.lessons.iter())
    }

    pub fn first_lesson(&self) -> Option<&Lesson> {
        self.modules.first()?.lessons.first()
    }

    /// Aula seguinte a `current_id`. `None` se for a última ou não existir.
    pub fn next_lesson(&self, current_id: &str) -> Option<&Lesson> {
        let mut lessons = self.lessons();
        lessons.find(|l| l.id == current_id)?;
        lessons.next()
    }

    pub fn lesson_count(&self) -> usize {
        self.lessons().count()
    }
}
