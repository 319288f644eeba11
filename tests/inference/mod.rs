mod classify;
mod decision;
